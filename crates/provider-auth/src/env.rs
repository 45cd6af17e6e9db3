//! Environment variable probing.
//!
//! Each provider maps to one or more legal variable names, tried in declared
//! priority. The first non-empty trimmed value wins; blank values count as
//! unset. A matched name containing `OAUTH_TOKEN` classifies the credential
//! as OAuth rather than a plain API key.

use secrecy::Secret;

use crate::{provider_id::normalize_provider_id, secret::normalize_secret};

/// A secret found in the environment, tagged with the variable it came from.
pub struct EnvApiKey {
    pub value: Secret<String>,
    pub var: &'static str,
}

impl EnvApiKey {
    /// Source descriptor for diagnostics, e.g. `env: Z_AI_API_KEY`.
    #[must_use]
    pub fn source(&self) -> String {
        format!("env: {}", self.var)
    }

    /// Whether the matched variable name marks an OAuth token.
    #[must_use]
    pub fn is_oauth(&self) -> bool {
        var_is_oauth(self.var)
    }
}

impl std::fmt::Debug for EnvApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvApiKey")
            .field("value", &"[REDACTED]")
            .field("var", &self.var)
            .finish()
    }
}

pub(crate) fn var_is_oauth(var: &str) -> bool {
    var.contains("OAUTH_TOKEN")
}

/// Legal variable names for a canonical provider id, in priority order.
///
/// Empty for providers without a known variable.
#[must_use]
pub fn env_var_candidates(normalized_provider: &str) -> &'static [&'static str] {
    match normalized_provider {
        "openai" => &["OPENAI_API_KEY"],
        "voyage" => &["VOYAGE_API_KEY"],
        "groq" => &["GROQ_API_KEY"],
        "deepgram" => &["DEEPGRAM_API_KEY"],
        "cerebras" => &["CEREBRAS_API_KEY"],
        "xai" => &["XAI_API_KEY"],
        "openrouter" => &["OPENROUTER_API_KEY"],
        "litellm" => &["LITELLM_API_KEY"],
        "vercel-ai-gateway" => &["AI_GATEWAY_API_KEY"],
        "moonshot" => &["MOONSHOT_API_KEY"],
        "nvidia" => &["NVIDIA_API_KEY"],
        "venice" => &["VENICE_API_KEY"],
        "mistral" => &["MISTRAL_API_KEY"],
        "together" => &["TOGETHER_API_KEY"],
        "qianfan" => &["QIANFAN_API_KEY"],
        "ollama" => &["OLLAMA_API_KEY"],
        "vllm" => &["VLLM_API_KEY"],
        "chutes" => &["CHUTES_OAUTH_TOKEN", "CHUTES_API_KEY"],
        "zai" => &["ZAI_API_KEY", "Z_AI_API_KEY"],
        "opencode" => &["OPENCODE_API_KEY", "OPENCODE_ZEN_API_KEY"],
        "qwen-portal" => &["QWEN_OAUTH_TOKEN", "QWEN_PORTAL_API_KEY"],
        "volcengine" | "volcengine-plan" => &["VOLCANO_ENGINE_API_KEY"],
        "byteplus" | "byteplus-plan" => &["BYTEPLUS_API_KEY"],
        "huggingface" => &["HUGGINGFACE_HUB_TOKEN", "HF_TOKEN"],
        _ => &[],
    }
}

/// Probe the process environment for a provider's API key.
#[must_use]
pub fn resolve_env_api_key(provider: &str) -> Option<EnvApiKey> {
    resolve_env_api_key_with(provider, |var| std::env::var(var).ok())
}

/// Probe with a custom lookup function.
///
/// This is the implementation behind [`resolve_env_api_key`]; the separate
/// signature makes the priority and trimming rules testable without mutating
/// the process environment.
pub fn resolve_env_api_key_with(
    provider: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> Option<EnvApiKey> {
    let normalized = normalize_provider_id(provider);
    env_var_candidates(&normalized).iter().copied().find_map(|var| {
        let value = normalize_secret(&lookup(var)?)?;
        Some(EnvApiKey {
            value: Secret::new(value),
            var,
        })
    })
}

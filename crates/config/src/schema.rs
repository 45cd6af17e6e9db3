//! Config schema types for model providers and auth profiles.

use std::collections::HashMap;

use {
    secrecy::{ExposeSecret, Secret},
    serde::{Deserialize, Serialize},
};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WharfConfig {
    pub models: ModelsConfig,
    pub auth: AuthConfig,
}

/// Model catalog configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelsConfig {
    pub providers: ProvidersConfig,
}

/// LLM provider configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    /// Provider-specific settings keyed by provider id as written in config.
    /// Keys are matched with id normalization, so "Z-AI" finds "zai".
    #[serde(flatten)]
    pub providers: HashMap<String, ProviderEntry>,
}

impl ProvidersConfig {
    /// Get the configured entry for a provider by raw key (no normalization).
    pub fn get(&self, name: &str) -> Option<&ProviderEntry> {
        self.providers.get(name)
    }

    /// Check if a provider is enabled (defaults to true if not configured).
    pub fn is_enabled(&self, name: &str) -> bool {
        self.providers.get(name).is_none_or(|e| e.enabled)
    }
}

/// Configuration for a single LLM provider.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderEntry {
    /// Whether this provider is enabled. Defaults to true.
    pub enabled: bool,

    /// Static API key. Profiles and env vars take precedence; this is the
    /// last resolution strategy before failure.
    #[serde(
        default,
        serialize_with = "serialize_option_secret",
        skip_serializing_if = "Option::is_none"
    )]
    pub api_key: Option<Secret<String>>,

    /// Override the base URL.
    pub base_url: Option<String>,

    /// Default model ID for this provider.
    pub model: Option<String>,
}

impl std::fmt::Debug for ProviderEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderEntry")
            .field("enabled", &self.enabled)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

impl Default for ProviderEntry {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key: None,
            base_url: None,
            model: None,
        }
    }
}

/// Auth profile configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Profile metadata keyed by profile id (e.g. "openai:default").
    pub profiles: HashMap<String, AuthProfileConfig>,

    /// Per-provider resolution order hints: profile ids to try, in order,
    /// after the store's own profiles.
    pub order: HashMap<String, Vec<String>>,
}

/// Metadata for a single configured auth profile.
///
/// The credential itself lives in the auth profile store; config only
/// carries routing metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthProfileConfig {
    /// Provider this profile authenticates against.
    pub provider: String,

    /// Declared credential mode ("api_key", "oauth", "token"). Advisory:
    /// the store record is authoritative and may disagree when stale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

// ── Serde helpers for Secret<String> ────────────────────────────────────────

fn serialize_option_secret<S: serde::Serializer>(
    secret: &Option<Secret<String>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match secret {
        Some(s) => serializer.serialize_some(s.expose_secret()),
        None => serializer.serialize_none(),
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_entry_debug_redacts_api_key() {
        let entry = ProviderEntry {
            api_key: Some(Secret::new("sk-secret".to_string())),
            ..ProviderEntry::default()
        };
        let debug = format!("{entry:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("sk-secret"));
    }

    #[test]
    fn providers_config_deserializes_flattened_map() {
        let cfg: ProvidersConfig = serde_json::from_value(serde_json::json!({
            "openai": { "api_key": "sk-test", "model": "gpt-4.1" },
            "zai": { "enabled": false }
        }))
        .unwrap();
        let openai = cfg.get("openai").unwrap();
        assert_eq!(
            openai.api_key.as_ref().unwrap().expose_secret(),
            "sk-test"
        );
        assert!(cfg.is_enabled("openai"));
        assert!(!cfg.is_enabled("zai"));
        assert!(cfg.is_enabled("never-mentioned"));
    }

    #[test]
    fn auth_config_defaults_to_empty() {
        let cfg: AuthConfig = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(cfg.profiles.is_empty());
        assert!(cfg.order.is_empty());
    }
}

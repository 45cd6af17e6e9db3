//! The credential resolution chain.
//!
//! Strategies run in a fixed order; the first to yield a secret wins:
//! store-backed profiles, then environment variables, then the static config
//! key. Per-candidate store failures are recorded and swallowed so one bad
//! profile never aborts the chain. Results are ephemeral: nothing is cached,
//! so rotated credentials take effect on the next call.

use {secrecy::Secret, tracing::debug};

use wharf_config::WharfConfig;

use crate::{
    config_key::custom_provider_api_key,
    env::{env_var_candidates, resolve_env_api_key_with, var_is_oauth},
    error::AuthError,
    mode::AuthMode,
    order::resolve_profile_order,
    profiles::AuthProfileSource,
    provider_id::normalize_provider_id,
};

/// Providers whose failures should point at an OAuth sibling instead of a
/// generic message: (provider, sibling holding the OAuth profile, label).
const OAUTH_SIBLINGS: &[(&str, &str, &str)] =
    &[("openai", "openai-codex", "OpenAI Codex OAuth")];

/// Where a resolved credential came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A store-backed auth profile.
    Profile(String),
    /// An environment variable.
    Env(&'static str),
    /// The static provider config.
    Config,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Profile(id) => write!(f, "profile:{id}"),
            Self::Env(var) => write!(f, "env: {var}"),
            Self::Config => f.write_str("config"),
        }
    }
}

/// A resolved provider credential. Never persisted or cached across calls.
pub struct ResolvedAuth {
    pub secret: Secret<String>,
    pub profile_id: Option<String>,
    pub source: Source,
    pub mode: AuthMode,
}

impl std::fmt::Debug for ResolvedAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedAuth")
            .field("secret", &"[REDACTED]")
            .field("profile_id", &self.profile_id)
            .field("source", &self.source)
            .field("mode", &self.mode)
            .finish()
    }
}

/// Inputs to [`resolve_api_key_for_provider`].
pub struct ResolveParams<'a> {
    pub provider: &'a str,
    pub cfg: Option<&'a WharfConfig>,
    /// Resolve exactly this profile; no fallback on failure.
    pub profile_id: Option<&'a str>,
    /// Try this profile first when it exists for the provider.
    pub preferred_profile: Option<&'a str>,
    pub store: &'a dyn AuthProfileSource,
}

/// Resolve the credential to use for a provider.
pub async fn resolve_api_key_for_provider(
    params: ResolveParams<'_>,
) -> crate::Result<ResolvedAuth> {
    resolve_api_key_for_provider_with(params, |var| std::env::var(var).ok()).await
}

/// [`resolve_api_key_for_provider`] with an injected env lookup, so the full
/// chain is testable without mutating the process environment.
pub async fn resolve_api_key_for_provider_with(
    params: ResolveParams<'_>,
    env_lookup: impl Fn(&str) -> Option<String>,
) -> crate::Result<ResolvedAuth> {
    let ResolveParams {
        provider,
        cfg,
        profile_id,
        preferred_profile,
        store,
    } = params;

    // Explicit profile requests never fall through to other strategies.
    if let Some(profile_id) = profile_id {
        let Some(secret) = attempt_profile(store, profile_id).await else {
            return Err(AuthError::ProfileResolutionFailed {
                profile_id: profile_id.to_string(),
            });
        };
        return Ok(ResolvedAuth {
            secret,
            profile_id: Some(profile_id.to_string()),
            source: Source::Profile(profile_id.to_string()),
            mode: profile_mode(store, profile_id),
        });
    }

    let configured_order = configured_order_hints(cfg, provider);
    let order =
        resolve_profile_order(store, provider, None, preferred_profile, &configured_order);
    for candidate in order {
        if let Some(secret) = attempt_profile(store, &candidate).await {
            let mode = profile_mode(store, &candidate);
            return Ok(ResolvedAuth {
                secret,
                profile_id: Some(candidate.clone()),
                source: Source::Profile(candidate),
                mode,
            });
        }
    }

    if let Some(env_key) = resolve_env_api_key_with(provider, env_lookup) {
        let mode = if env_key.is_oauth() {
            AuthMode::Oauth
        } else {
            AuthMode::ApiKey
        };
        return Ok(ResolvedAuth {
            secret: env_key.value,
            profile_id: None,
            source: Source::Env(env_key.var),
            mode,
        });
    }

    if let Some(secret) = custom_provider_api_key(cfg, provider) {
        return Ok(ResolvedAuth {
            secret,
            profile_id: None,
            source: Source::Config,
            mode: AuthMode::ApiKey,
        });
    }

    Err(exhausted(store, provider))
}

/// Attempt one candidate; record failure and continue. Backend errors during
/// chain walking are isolated and never unwind the whole resolution.
async fn attempt_profile(
    store: &dyn AuthProfileSource,
    profile_id: &str,
) -> Option<Secret<String>> {
    match store.resolve_secret(profile_id).await {
        Ok(found) => found,
        Err(err) => {
            debug!(profile_id, error = %err, "profile resolution failed, trying next candidate");
            None
        },
    }
}

fn profile_mode(store: &dyn AuthProfileSource, profile_id: &str) -> AuthMode {
    store
        .record(profile_id)
        .map(|record| record.credential.kind().into())
        .unwrap_or(AuthMode::ApiKey)
}

/// Configured order hints for a provider, matched with id normalization.
fn configured_order_hints(cfg: Option<&WharfConfig>, provider: &str) -> Vec<String> {
    let Some(cfg) = cfg else {
        return Vec::new();
    };
    let normalized = normalize_provider_id(provider);
    cfg.auth
        .order
        .iter()
        .find(|(key, _)| normalize_provider_id(key) == normalized)
        .map(|(_, ids)| ids.clone())
        .unwrap_or_default()
}

/// The terminal failure once every strategy is exhausted. When a sibling
/// provider holds an OAuth profile, steer the caller there instead of
/// emitting the generic diagnostic.
fn exhausted(store: &dyn AuthProfileSource, provider: &str) -> AuthError {
    let normalized = normalize_provider_id(provider);
    for (candidate, sibling, label) in OAUTH_SIBLINGS {
        if normalized == *candidate && !store.profiles_for_provider(sibling).is_empty() {
            let env_var = env_var_candidates(&normalized)
                .iter()
                .copied()
                .find(|var| !var_is_oauth(var))
                .unwrap_or("the provider's API key variable");
            return AuthError::OauthSiblingAvailable {
                provider: provider.to_string(),
                sibling: (*sibling).to_string(),
                label: (*label).to_string(),
                env_var: env_var.to_string(),
            };
        }
    }
    AuthError::NoCredentialFound {
        provider: provider.to_string(),
        store_path: store.display_path(),
    }
}

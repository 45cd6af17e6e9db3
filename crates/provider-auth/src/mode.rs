//! Semantic auth-mode classification.
//!
//! Classification inspects credential kinds and metadata only. It never
//! forces a secret fetch, so it is safe to call from status and diagnostics
//! paths without triggering keychain prompts.

use serde::Serialize;

use crate::{
    config_key::custom_provider_api_key,
    env::resolve_env_api_key_with,
    profiles::{AuthProfileSource, CredentialKind},
};
use wharf_config::WharfConfig;

/// How a provider is authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthMode {
    ApiKey,
    Oauth,
    Token,
    /// Two or more distinct credential kinds registered for one provider.
    Mixed,
    Unknown,
}

impl From<CredentialKind> for AuthMode {
    fn from(kind: CredentialKind) -> Self {
        match kind {
            CredentialKind::ApiKey => Self::ApiKey,
            CredentialKind::Oauth => Self::Oauth,
            CredentialKind::Token => Self::Token,
        }
    }
}

impl std::fmt::Display for AuthMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::ApiKey => "api-key",
            Self::Oauth => "oauth",
            Self::Token => "token",
            Self::Mixed => "mixed",
            Self::Unknown => "unknown",
        })
    }
}

/// Classify a provider's auth mode from the store and config snapshot.
#[must_use]
pub fn resolve_model_auth_mode(
    provider: &str,
    cfg: Option<&WharfConfig>,
    store: &dyn AuthProfileSource,
) -> AuthMode {
    resolve_model_auth_mode_with(provider, cfg, store, |var| std::env::var(var).ok())
}

/// Classification with an injected env lookup (see
/// [`crate::env::resolve_env_api_key_with`]).
pub fn resolve_model_auth_mode_with(
    provider: &str,
    cfg: Option<&WharfConfig>,
    store: &dyn AuthProfileSource,
    env_lookup: impl Fn(&str) -> Option<String>,
) -> AuthMode {
    let provider = provider.trim();
    if provider.is_empty() {
        return AuthMode::Unknown;
    }

    let kinds: std::collections::HashSet<CredentialKind> = store
        .profiles_for_provider(provider)
        .iter()
        .filter_map(|id| store.record(id))
        .map(|record| record.credential.kind())
        .collect();
    if kinds.len() >= 2 {
        return AuthMode::Mixed;
    }
    if let Some(kind) = kinds.into_iter().next() {
        return kind.into();
    }

    if let Some(env_key) = resolve_env_api_key_with(provider, env_lookup) {
        return if env_key.is_oauth() {
            AuthMode::Oauth
        } else {
            AuthMode::ApiKey
        };
    }

    if custom_provider_api_key(cfg, provider).is_some() {
        return AuthMode::ApiKey;
    }

    AuthMode::Unknown
}

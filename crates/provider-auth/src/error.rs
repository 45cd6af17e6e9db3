//! Credential resolution error types.
//!
//! Per-candidate store failures are swallowed during chain walking and never
//! surface here; only exhaustion of every strategy escalates. No variant
//! carries a secret value.

/// Crate-wide result type for credential resolution.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Errors produced by provider credential resolution.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// An explicitly requested profile id has no retrievable credential.
    /// Explicit requests never fall back to other strategies.
    #[error("no credentials found for profile \"{profile_id}\"")]
    ProfileResolutionFailed { profile_id: String },

    /// Profiles, environment variables, and static config are all exhausted.
    #[error(
        "no API key found for provider \"{provider}\". Auth store: {store_path}. \
         Add a profile with `wharf auth login {provider}` or set the provider's \
         api_key in config."
    )]
    NoCredentialFound {
        provider: String,
        store_path: String,
    },

    /// A sibling provider holds an OAuth credential that the caller probably
    /// meant to use. Substituted for the generic failure so the message is
    /// actionable; credentials are never silently borrowed across providers.
    #[error(
        "no API key found for provider \"{provider}\". You are authenticated \
         with {label}. Use the \"{sibling}\" provider, or set {env_var} to use \
         \"{provider}\" directly."
    )]
    OauthSiblingAvailable {
        provider: String,
        sibling: String,
        label: String,
        env_var: String,
    },

    /// Wrapped error from an external secret backend.
    #[error("secret backend failure: {context}")]
    Backend {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl AuthError {
    #[must_use]
    pub fn backend(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Backend {
            context: context.into(),
            source: Box::new(source),
        }
    }
}

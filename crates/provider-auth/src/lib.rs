//! Provider credential resolution.
//!
//! Every outbound model call resolves its credential through a fixed chain:
//! auth profiles (most specific first), then environment variables, then the
//! static provider config. Explicitly requested profiles never fall back.
//! Secrets are wrapped in [`secrecy::Secret`] end to end and never appear in
//! logs or error messages.

pub mod config_key;
pub mod env;
pub mod error;
pub mod mode;
pub mod order;
pub mod profiles;
pub mod provider_id;
pub mod resolver;
pub mod secret;

pub use {
    config_key::{custom_provider_api_key, resolve_provider_entry},
    env::{EnvApiKey, resolve_env_api_key, resolve_env_api_key_with},
    error::{AuthError, Result},
    mode::{AuthMode, resolve_model_auth_mode, resolve_model_auth_mode_with},
    order::resolve_profile_order,
    profiles::{AuthProfileSource, AuthProfileStore, Credential, CredentialKind, ProfileRecord},
    provider_id::normalize_provider_id,
    resolver::{
        ResolveParams, ResolvedAuth, Source, resolve_api_key_for_provider,
        resolve_api_key_for_provider_with,
    },
    secret::{normalize_optional_secret, normalize_secret},
};

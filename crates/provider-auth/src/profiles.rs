//! Auth profile store interface.
//!
//! Profiles are persisted credential records scoped to a provider. The store
//! is loaded once at startup by the gateway and is read-only here; add and
//! remove operations live with the profile-management commands.

use std::path::{Path, PathBuf};

use {
    async_trait::async_trait,
    secrecy::{ExposeSecret, Secret},
    serde::Deserialize,
};

use crate::{error::Result, provider_id::normalize_provider_id, secret::normalize_secret};

/// Credential kind tag, used for mode classification without touching the
/// secret payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialKind {
    ApiKey,
    Oauth,
    Token,
}

/// A stored credential. One variant per kind; the kind is immutable once a
/// profile is created.
#[derive(Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Credential {
    ApiKey {
        key: Secret<String>,
    },
    Oauth {
        access: Secret<String>,
        #[serde(default)]
        refresh: Option<Secret<String>>,
        #[serde(default)]
        account_id: Option<String>,
    },
    Token {
        token: Secret<String>,
        /// Unix timestamp; advisory only, expiry enforcement belongs to the
        /// backend that refreshes tokens.
        #[serde(default)]
        expires_at: Option<i64>,
    },
}

impl Credential {
    #[must_use]
    pub fn kind(&self) -> CredentialKind {
        match self {
            Self::ApiKey { .. } => CredentialKind::ApiKey,
            Self::Oauth { .. } => CredentialKind::Oauth,
            Self::Token { .. } => CredentialKind::Token,
        }
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ApiKey { .. } => f.debug_struct("ApiKey").field("key", &"[REDACTED]").finish(),
            Self::Oauth { account_id, .. } => f
                .debug_struct("Oauth")
                .field("access", &"[REDACTED]")
                .field("account_id", account_id)
                .finish(),
            Self::Token { expires_at, .. } => f
                .debug_struct("Token")
                .field("token", &"[REDACTED]")
                .field("expires_at", expires_at)
                .finish(),
        }
    }
}

/// A named profile: id, owning provider, credential.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileRecord {
    /// Unique within a store (e.g. "openai:default").
    pub id: String,
    pub provider: String,
    pub credential: Credential,
}

/// Read access to auth profiles, plus the per-profile secret lookup.
///
/// [`AuthProfileStore`] implements this over in-memory records; keychain or
/// network-backed stores implement the same trait externally. `resolve_secret`
/// may fail per call; callers walking a candidate chain swallow those
/// failures and continue.
#[async_trait]
pub trait AuthProfileSource: Send + Sync {
    /// Profile ids registered for a provider, in store order. Provider
    /// comparison uses id normalization on both sides.
    fn profiles_for_provider(&self, provider: &str) -> Vec<String>;

    /// The record behind a profile id, if any.
    fn record(&self, profile_id: &str) -> Option<&ProfileRecord>;

    /// Resolve the usable secret for a profile. `Ok(None)` means the profile
    /// has no retrievable credential; `Err` means the backend itself failed.
    async fn resolve_secret(&self, profile_id: &str) -> Result<Option<Secret<String>>>;

    /// Store location for diagnostics. Never contains secret material.
    fn display_path(&self) -> String;
}

/// In-memory auth profile store, deserialized once from persisted state.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthProfileStore {
    #[serde(default)]
    records: Vec<ProfileRecord>,
    #[serde(skip)]
    path: PathBuf,
}

impl AuthProfileStore {
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            records: Vec::new(),
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn with_records(path: impl AsRef<Path>, records: Vec<ProfileRecord>) -> Self {
        Self {
            records,
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn records(&self) -> &[ProfileRecord] {
        &self.records
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl AuthProfileSource for AuthProfileStore {
    fn profiles_for_provider(&self, provider: &str) -> Vec<String> {
        let normalized = normalize_provider_id(provider);
        self.records
            .iter()
            .filter(|r| normalize_provider_id(&r.provider) == normalized)
            .map(|r| r.id.clone())
            .collect()
    }

    fn record(&self, profile_id: &str) -> Option<&ProfileRecord> {
        self.records.iter().find(|r| r.id == profile_id)
    }

    async fn resolve_secret(&self, profile_id: &str) -> Result<Option<Secret<String>>> {
        let Some(record) = self.record(profile_id) else {
            return Ok(None);
        };
        let raw = match &record.credential {
            Credential::ApiKey { key } => key,
            Credential::Oauth { access, .. } => access,
            Credential::Token { token, .. } => token,
        };
        Ok(normalize_secret(raw.expose_secret()).map(Secret::new))
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

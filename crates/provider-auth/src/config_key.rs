//! Static-config API key lookup.

use secrecy::{ExposeSecret, Secret};
use wharf_config::{ProviderEntry, WharfConfig};

use crate::{provider_id::normalize_provider_id, secret::normalize_secret};

/// The configured entry for a provider, matching keys with id normalization
/// on both sides. A direct key hit wins over a normalized scan.
pub fn resolve_provider_entry<'a>(
    cfg: Option<&'a WharfConfig>,
    provider: &str,
) -> Option<&'a ProviderEntry> {
    let providers = &cfg?.models.providers.providers;
    if let Some(direct) = providers.get(provider) {
        return Some(direct);
    }
    let normalized = normalize_provider_id(provider);
    providers
        .iter()
        .find(|(key, _)| normalize_provider_id(key) == normalized)
        .map(|(_, entry)| entry)
}

/// The statically configured API key for a provider, trimmed; blank values
/// count as absent.
pub fn custom_provider_api_key(
    cfg: Option<&WharfConfig>,
    provider: &str,
) -> Option<Secret<String>> {
    let entry = resolve_provider_entry(cfg, provider)?;
    let key = entry.api_key.as_ref()?;
    normalize_secret(key.expose_secret()).map(Secret::new)
}

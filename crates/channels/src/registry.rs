//! Channel id normalization and alias resolution.
//!
//! Unresolvable input is a plain `None`, never an error; callers decide
//! whether an unknown channel is fatal.

use crate::plugin::PluginRegistry;

/// Built-in channel ids in fixed declared order. Empty: built-in channels
/// have all moved to plugins.
pub const STATIC_CHANNEL_ORDER: &[&str] = &[];

/// Alias → canonical id for built-in channels.
const STATIC_CHANNEL_ALIASES: &[(&str, &str)] = &[];

fn normalize_channel_key(raw: &str) -> Option<String> {
    let normalized = raw.trim().to_lowercase();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Resolve a raw spelling against the built-in table only.
#[must_use]
pub fn normalize_channel_id(raw: &str) -> Option<String> {
    normalize_channel_id_with(STATIC_CHANNEL_ORDER, STATIC_CHANNEL_ALIASES, raw)
}

/// The implementation behind [`normalize_channel_id`], parameterized over the
/// table so the fold/membership rules stay testable while the built-in table
/// is empty.
fn normalize_channel_id_with(
    order: &[&str],
    aliases: &[(&str, &str)],
    raw: &str,
) -> Option<String> {
    let key = normalize_channel_key(raw)?;
    let resolved = aliases
        .iter()
        .find(|(alias, _)| *alias == key)
        .map_or(key.as_str(), |(_, canonical)| *canonical);
    order
        .contains(&resolved)
        .then(|| resolved.to_string())
}

/// Resolve a raw spelling against built-ins and plugin registrations.
///
/// Plugin ids and plugin-declared aliases match case-insensitively; the
/// canonical plugin id is returned as registered.
#[must_use]
pub fn normalize_any_channel_id(registry: &PluginRegistry, raw: &str) -> Option<String> {
    if let Some(builtin) = normalize_channel_id(raw) {
        return Some(builtin);
    }
    let key = normalize_channel_key(raw)?;
    registry
        .channels()
        .iter()
        .find(|registration| {
            let id = registration.plugin_id.trim().to_lowercase();
            if !id.is_empty() && id == key {
                return true;
            }
            registration
                .aliases
                .iter()
                .any(|alias| alias.trim().to_lowercase() == key)
        })
        .map(|registration| registration.plugin_id.clone())
}

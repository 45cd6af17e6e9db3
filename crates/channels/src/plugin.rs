//! Plugin-registered channel shapes.
//!
//! Registrations are produced by the plugin loader and consumed read-only
//! here; registration sequence is preserved as received.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::dock::ChannelDock;

/// A channel contributed by a plugin.
#[derive(Debug, Clone, Deserialize)]
pub struct PluginChannelRegistration {
    /// Channel id the plugin claims (e.g. "mattermost").
    pub plugin_id: String,

    /// The dock entry for this channel.
    pub dock: ChannelDock,

    /// Explicit position in the merged dock table. Unordered registrations
    /// sort after every ordered entry.
    #[serde(default)]
    pub order: Option<i64>,

    /// Alternate spellings accepted by id normalization, matched
    /// case-insensitively.
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// The loaded plugin registry: an ordered, read-only sequence of channel
/// registrations.
#[derive(Debug, Default)]
pub struct PluginRegistry {
    channels: Vec<PluginChannelRegistration>,
    /// Merged dock table, built lazily on first list and stable for this
    /// registry's lifetime. A registry reload swaps the whole registry.
    merged: OnceLock<Vec<ChannelDock>>,
}

impl PluginRegistry {
    #[must_use]
    pub fn new(channels: Vec<PluginChannelRegistration>) -> Self {
        Self {
            channels,
            merged: OnceLock::new(),
        }
    }

    #[must_use]
    pub fn channels(&self) -> &[PluginChannelRegistration] {
        &self.channels
    }

    pub(crate) fn merged_docks(&self, build: impl FnOnce() -> Vec<ChannelDock>) -> &[ChannelDock] {
        self.merged.get_or_init(build)
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_deserializes_with_optional_fields_defaulted() {
        let registration: PluginChannelRegistration = serde_json::from_value(serde_json::json!({
            "plugin_id": "mattermost",
            "dock": {
                "id": "mattermost",
                "capabilities": { "threads": true },
                "outbound": { "text_chunk_limit": 4000 }
            }
        }))
        .unwrap();
        assert_eq!(registration.plugin_id, "mattermost");
        assert!(registration.dock.capabilities.threads);
        assert!(!registration.dock.capabilities.media);
        assert_eq!(registration.order, None);
        assert!(registration.aliases.is_empty());
        assert_eq!(
            registration.dock.outbound.unwrap().text_chunk_limit,
            Some(4000)
        );
    }
}

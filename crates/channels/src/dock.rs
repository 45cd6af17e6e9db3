//! Channel docks and the merged dock table.
//!
//! Docks stay light: capability flags, outbound/streaming defaults, command
//! metadata. Anything heavy (monitors, probes, login flows) belongs to the
//! channel implementation, not the dock.

use std::collections::HashSet;

use {
    serde::{Deserialize, Serialize},
    tracing::debug,
};

use crate::plugin::PluginRegistry;

/// What a channel implementation supports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelCapabilities {
    pub media: bool,
    pub threads: bool,
    pub reactions: bool,
    pub edits: bool,
    pub polls: bool,
}

/// Outbound message defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundDefaults {
    /// Platform text chunk limit in characters.
    pub text_chunk_limit: Option<usize>,
}

/// Block-streaming coalesce defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamingDefaults {
    pub min_chars: Option<usize>,
    pub idle_ms: Option<u64>,
}

/// Command handling metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDefaults {
    /// Whether the platform supports native slash-command registration.
    pub native_commands: bool,
}

/// A channel's capability entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelDock {
    pub id: String,
    #[serde(default)]
    pub capabilities: ChannelCapabilities,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outbound: Option<OutboundDefaults>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streaming: Option<StreamingDefaults>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commands: Option<CommandDefaults>,
}

/// Sort key for entries with no explicit order and no static position:
/// after every ordered entry.
const UNORDERED: i64 = i64::MAX;

/// Built-in dock table in fixed declared order.
///
/// Built-in channels have all moved to plugins, so the table is empty; the
/// merge logic still honors it so re-introducing a built-in is a data change.
pub struct DockTable {
    entries: Vec<ChannelDock>,
}

impl DockTable {
    #[must_use]
    pub fn new(entries: Vec<ChannelDock>) -> Self {
        Self { entries }
    }

    fn static_index(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|dock| dock.id == id)
    }

    /// Merge static entries with plugin registrations into one ordered,
    /// id-unique table.
    ///
    /// Static entries come first in declared order and are never shadowed by
    /// a colliding plugin id. Among plugins, the first registration for an id
    /// wins. Final order: explicit order hint, else static positional index,
    /// else after all ordered entries; ties break lexically by id. The result
    /// is independent of plugin registration sequence.
    #[must_use]
    pub fn merge(&self, registry: &PluginRegistry) -> Vec<ChannelDock> {
        let mut combined: Vec<(i64, ChannelDock)> = self
            .entries
            .iter()
            .enumerate()
            .map(|(index, dock)| (index as i64, dock.clone()))
            .collect();

        let mut seen: HashSet<String> =
            self.entries.iter().map(|dock| dock.id.clone()).collect();
        for registration in registry.channels() {
            let id = registration.plugin_id.trim();
            if id.is_empty() {
                continue;
            }
            if self.static_index(id).is_some() {
                debug!(id, "plugin channel id collides with a built-in dock, skipping");
                continue;
            }
            if !seen.insert(id.to_string()) {
                debug!(id, "duplicate plugin channel registration, keeping first");
                continue;
            }
            let key = registration.order.unwrap_or(UNORDERED);
            combined.push((key, registration.dock.clone()));
        }

        combined.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.id.cmp(&b.1.id)));
        combined.into_iter().map(|(_, dock)| dock).collect()
    }

    /// Look up one dock: static table first, then plugin registrations.
    /// Absence is a valid non-error result.
    #[must_use]
    pub fn get(&self, registry: &PluginRegistry, id: &str) -> Option<ChannelDock> {
        if let Some(index) = self.static_index(id) {
            return Some(self.entries[index].clone());
        }
        registry
            .channels()
            .iter()
            .find(|registration| registration.plugin_id == id)
            .map(|registration| registration.dock.clone())
    }
}

fn builtin_table() -> &'static DockTable {
    static TABLE: std::sync::LazyLock<DockTable> =
        std::sync::LazyLock::new(|| DockTable::new(Vec::new()));
    &TABLE
}

/// All channel docks in merged order. Memoized per registry.
#[must_use]
pub fn list_channel_docks(registry: &PluginRegistry) -> Vec<ChannelDock> {
    registry
        .merged_docks(|| builtin_table().merge(registry))
        .to_vec()
}

/// One channel's dock, if registered.
#[must_use]
pub fn get_channel_dock(registry: &PluginRegistry, id: &str) -> Option<ChannelDock> {
    builtin_table().get(registry, id)
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {super::*, crate::plugin::PluginChannelRegistration};

    fn dock(id: &str) -> ChannelDock {
        ChannelDock {
            id: id.into(),
            capabilities: ChannelCapabilities::default(),
            outbound: None,
            streaming: None,
            commands: None,
        }
    }

    fn registration(id: &str, order: Option<i64>) -> PluginChannelRegistration {
        PluginChannelRegistration {
            plugin_id: id.into(),
            dock: dock(id),
            order,
            aliases: Vec::new(),
        }
    }

    fn ids(docks: &[ChannelDock]) -> Vec<&str> {
        docks.iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn static_entries_keep_declared_order() {
        let table = DockTable::new(vec![dock("telegram"), dock("discord")]);
        let registry = PluginRegistry::new(vec![]);
        assert_eq!(ids(&table.merge(&registry)), ["telegram", "discord"]);
    }

    #[test]
    fn first_plugin_registration_wins_for_duplicate_id() {
        let table = DockTable::new(vec![]);
        let mut first = registration("mattermost", Some(5));
        first.dock.capabilities.threads = true;
        let registry = PluginRegistry::new(vec![first, registration("mattermost", Some(1))]);

        let merged = table.merge(&registry);
        assert_eq!(merged.len(), 1);
        assert!(merged[0].capabilities.threads);
        let looked_up = table.get(&registry, "mattermost").unwrap();
        assert!(looked_up.capabilities.threads);
    }

    #[test]
    fn plugin_id_never_shadows_static_entry() {
        let mut builtin = dock("telegram");
        builtin.capabilities.media = true;
        let table = DockTable::new(vec![builtin]);
        let registry = PluginRegistry::new(vec![registration("telegram", Some(0))]);

        let merged = table.merge(&registry);
        assert_eq!(merged.len(), 1);
        assert!(merged[0].capabilities.media);
        assert!(table.get(&registry, "telegram").unwrap().capabilities.media);
    }

    #[test]
    fn unordered_entries_sort_after_ordered_ties_break_lexically() {
        let table = DockTable::new(vec![dock("telegram")]);
        let registry = PluginRegistry::new(vec![
            registration("zulip", None),
            registration("irc", None),
            registration("mattermost", Some(0)),
        ]);
        // mattermost shares hint 0 with telegram's static index; lexical
        // tiebreak puts it first.
        assert_eq!(ids(&table.merge(&registry)), [
            "mattermost",
            "telegram",
            "irc",
            "zulip"
        ]);
    }

    #[test]
    fn merge_is_independent_of_registration_sequence() {
        let table = DockTable::new(vec![]);
        let forward = PluginRegistry::new(vec![
            registration("a", Some(2)),
            registration("b", Some(1)),
            registration("c", None),
        ]);
        let reversed = PluginRegistry::new(vec![
            registration("c", None),
            registration("b", Some(1)),
            registration("a", Some(2)),
        ]);
        assert_eq!(ids(&table.merge(&forward)), ids(&table.merge(&reversed)));
        assert_eq!(ids(&table.merge(&forward)), ["b", "a", "c"]);
    }

    #[test]
    fn repeated_merges_are_identical() {
        let table = DockTable::new(vec![dock("telegram")]);
        let registry = PluginRegistry::new(vec![
            registration("zulip", None),
            registration("mattermost", Some(7)),
        ]);
        assert_eq!(table.merge(&registry), table.merge(&registry));
    }

    #[test]
    fn blank_plugin_ids_are_dropped() {
        let table = DockTable::new(vec![]);
        let registry = PluginRegistry::new(vec![registration("  ", None)]);
        assert!(table.merge(&registry).is_empty());
    }

    #[test]
    fn absent_dock_is_a_non_error_miss() {
        let registry = PluginRegistry::new(vec![]);
        assert!(get_channel_dock(&registry, "nonexistent").is_none());
    }

    #[test]
    fn list_is_memoized_per_registry() {
        let registry = PluginRegistry::new(vec![registration("mattermost", None)]);
        let first = list_channel_docks(&registry);
        let second = list_channel_docks(&registry);
        assert_eq!(first, second);
        assert_eq!(ids(&first), ["mattermost"]);
    }
}

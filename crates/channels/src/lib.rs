//! Channel capability registry ("docks").
//!
//! A dock is the lightweight metadata and defaults bundle describing what a
//! chat-channel implementation supports. Built-in docks merge with
//! plugin-registered ones into a single deterministically ordered, id-unique
//! table consumed by message routing.

pub mod active;
pub mod dock;
pub mod plugin;
pub mod registry;

pub use {
    active::ActiveRegistry,
    dock::{
        ChannelCapabilities, ChannelDock, CommandDefaults, DockTable, OutboundDefaults,
        StreamingDefaults, get_channel_dock, list_channel_docks,
    },
    plugin::{PluginChannelRegistration, PluginRegistry},
    registry::{normalize_any_channel_id, normalize_channel_id},
};

/// Crate-wide result type for channel registry operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Typed channel registry errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Dock lookups ran before a plugin registry was activated. Failing
    /// loudly here beats silently serving an empty channel table.
    #[error("no active plugin registry; activate one during gateway startup")]
    RegistryNotActivated,
}

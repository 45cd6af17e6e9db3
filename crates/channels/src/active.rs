//! The process-wide active plugin registry handle.
//!
//! One swappable, read-mostly reference, set once during gateway startup
//! before concurrent reads begin. A hot-swap on plugin reload is atomic:
//! readers see either the old or the new registry in full, never a partial
//! one. The handle is passed explicitly to the code that needs it rather
//! than living in an ambient global.

use std::sync::{Arc, RwLock};

use crate::{Error, Result, plugin::PluginRegistry};

/// Swappable handle to the active [`PluginRegistry`].
#[derive(Debug, Default)]
pub struct ActiveRegistry {
    inner: RwLock<Option<Arc<PluginRegistry>>>,
}

impl ActiveRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(None),
        }
    }

    /// Swap in a registry. Readers holding the previous `Arc` keep a
    /// consistent view until they drop it.
    pub fn activate(&self, registry: Arc<PluginRegistry>) {
        let mut slot = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(registry);
    }

    /// The active registry, or `None` before activation.
    #[must_use]
    pub fn get(&self) -> Option<Arc<PluginRegistry>> {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// The active registry; fails loudly when nothing has been activated
    /// instead of behaving like an empty channel table.
    pub fn require(&self) -> Result<Arc<PluginRegistry>> {
        self.get().ok_or(Error::RegistryNotActivated)
    }
}

//! Configuration schema types consumed by the credential resolver and the
//! channel dock registry.
//!
//! File discovery, parsing, and validation live in the gateway's loader;
//! this crate only defines the deserialized shapes.

pub mod schema;

pub use schema::{
    AuthConfig, AuthProfileConfig, ModelsConfig, ProviderEntry, ProvidersConfig, WharfConfig,
};

//! Data-driven configuration for the mend-arrow mechanic.
//!
//! This crate owns everything the core treats as an external settings
//! collaborator:
//! - The persisted settings format (TOML) with versioned migration
//! - The item catalog format (RON) and a built-in default catalog
//!
//! Content is consumed by runtime oracles and never appears in core state.
//! All loaders use mend-core types directly with serde deserialization.

#[cfg(feature = "serde")]
pub mod settings;

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "serde")]
pub use settings::{CONFIG_VERSION, MechanicSettings};

#[cfg(feature = "loaders")]
pub use loaders::{ItemLoader, SettingsLoader};

//! Deterministic heal-on-hit decision logic shared across hosts.
//!
//! `mend-core` defines the canonical rules for the mend-arrow mechanic: an
//! attacker lands a ranged hit on a friendly actor while holding the trigger
//! input, a configured list of consumables is atomically deducted from their
//! inventory, and the target is healed (and optionally revived) instead of
//! damaged. All state mutation flows through [`pipeline::handle_attack`], and
//! supporting crates depend on the types re-exported here.
pub mod catalog;
pub mod config;
pub mod eligibility;
pub mod env;
pub mod error;
pub mod event;
pub mod heal;
pub mod ledger;
pub mod pipeline;
pub mod state;

pub use catalog::{CatalogError, RequirementCatalog, RequirementSpec, ResourceRequirement};
pub use config::MechanicConfig;
pub use eligibility::{RejectReason, evaluate};
pub use env::{
    AuthorizationOracle, Env, FullHealthPolicy, ItemDefinition, ItemKind, ItemOracle, MechanicEnv,
    OracleError, SettingsOracle, SettingsSnapshot, WeaponData, WeaponMatcher,
};
pub use error::{ErrorSeverity, MechanicError};
pub use event::{AttackEvent, HeldButtons};
pub use heal::{HealApplied, HealPlan};
pub use ledger::{Shortfall, try_consume};
pub use pipeline::{HealOutcome, HealRejection, apply_heal_to, handle_attack};
pub use state::{
    ActorState, EntityId, InventorySlot, InventoryState, ItemHandle, RegenEffect, ResourceMeter,
    Tick, WorldState,
};

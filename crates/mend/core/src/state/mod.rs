//! Mutable world state touched by one heal transaction.
//!
//! The mechanic mutates exactly two actors per event: the attacker's
//! inventory and the target's health/wounded state. Everything here is plain
//! data; decisions live in [`crate::eligibility`], [`crate::ledger`] and
//! [`crate::heal`].

pub mod actor;
pub mod common;
pub mod effects;
pub mod inventory;

pub use actor::{ActorState, WorldState};
pub use common::{EntityId, ItemHandle, ResourceMeter, Tick};
pub use effects::RegenEffect;
pub use inventory::{InventorySlot, InventoryState};

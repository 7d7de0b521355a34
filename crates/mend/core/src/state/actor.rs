//! Actor state and the world lookup the pipeline mutates through.

use crate::state::{EntityId, InventoryState, ItemHandle, RegenEffect, ResourceMeter, Tick};

/// Health, wounded status, and inventory for one actor.
///
/// `wounded` is the incapacitated-but-recoverable state: the actor is down
/// but can be revived back into play. It is independent of current health.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorState {
    pub id: EntityId,
    pub health: ResourceMeter,
    pub wounded: bool,
    /// Automated actors are never heal targets.
    pub is_npc: bool,
    pub inventory: InventoryState,
    pub regen: Option<RegenEffect>,
}

impl ActorState {
    pub fn new(id: EntityId, health: ResourceMeter) -> Self {
        Self {
            id,
            health,
            wounded: false,
            is_npc: false,
            inventory: InventoryState::empty(),
            regen: None,
        }
    }

    pub fn with_wounded(mut self) -> Self {
        self.wounded = true;
        self
    }

    pub fn with_npc(mut self) -> Self {
        self.is_npc = true;
        self
    }

    pub fn with_item(mut self, handle: ItemHandle, quantity: u32) -> Self {
        self.inventory.give(handle, quantity);
        self
    }

    /// Install or stack a regeneration effect, discarding an expired one.
    pub fn add_regen(&mut self, effect: RegenEffect, now: Tick) {
        match &mut self.regen {
            Some(existing) if existing.is_active(now) => existing.stack(effect),
            _ => self.regen = Some(effect),
        }
    }
}

/// Flat actor store standing in for the host world.
///
/// The clock advances under host control; the mechanic only reads it when
/// stamping regeneration expiry.
#[derive(Clone, Debug, Default)]
pub struct WorldState {
    pub clock: Tick,
    actors: Vec<ActorState>,
}

impl WorldState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, actor: ActorState) {
        debug_assert!(
            self.actor(actor.id).is_none(),
            "duplicate actor id in world"
        );
        self.actors.push(actor);
    }

    pub fn actor(&self, id: EntityId) -> Option<&ActorState> {
        self.actors.iter().find(|a| a.id == id)
    }

    pub fn actor_mut(&mut self, id: EntityId) -> Option<&mut ActorState> {
        self.actors.iter_mut().find(|a| a.id == id)
    }

    /// Remove an actor from the world (death, disconnect, despawn).
    pub fn remove(&mut self, id: EntityId) -> Option<ActorState> {
        let index = self.actors.iter().position(|a| a.id == id)?;
        Some(self.actors.remove(index))
    }
}

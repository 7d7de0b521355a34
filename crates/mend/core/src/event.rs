//! Inbound attack event, produced once per triggering hit.

use bitflags::bitflags;

use crate::state::{EntityId, ItemHandle};

bitflags! {
    /// Server-input buttons held at the moment of a hit.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct HeldButtons: u8 {
        const USE = 1 << 0;
        const SPRINT = 1 << 1;
        const DUCK = 1 << 2;
        const RELOAD = 1 << 3;
    }
}

impl HeldButtons {
    /// Parse a configured trigger-input name into a single button.
    pub fn from_trigger_name(name: &str) -> Option<Self> {
        match name {
            "use" => Some(Self::USE),
            "sprint" => Some(Self::SPRINT),
            "duck" => Some(Self::DUCK),
            "reload" => Some(Self::RELOAD),
            _ => None,
        }
    }
}

/// One qualifying-or-not hit, consumed synchronously and never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackEvent {
    pub attacker: EntityId,
    pub target: EntityId,
    /// Weapon that produced the hit, resolved through the item oracle.
    pub weapon: ItemHandle,
    /// Buttons the attacker is holding down at the moment of the hit.
    pub held: HeldButtons,
    /// Damage the host would apply if the hit is not converted into a heal.
    pub raw_damage: u32,
}

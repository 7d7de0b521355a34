use crate::state::ItemHandle;

/// Read-only view of the host's item catalog.
///
/// The mechanic resolves two things through it: configured ingredient
/// shortnames into handles (at catalog-load time), and the weapon handle on
/// an attack event into a definition for class matching.
pub trait ItemOracle: Send + Sync {
    fn definition(&self, handle: ItemHandle) -> Option<&ItemDefinition>;

    /// Resolve a configured shortname to a handle. None means the item does
    /// not exist in the host catalog.
    fn find_by_shortname(&self, shortname: &str) -> Option<ItemHandle>;
}

/// Item definition with common fields and type-specific data.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub handle: ItemHandle,
    /// Stable string identifier, e.g. `"medical.syringe"` or `"bow.hunting"`.
    pub shortname: String,
    pub kind: ItemKind,
}

impl ItemDefinition {
    pub fn new(handle: ItemHandle, shortname: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            handle,
            shortname: shortname.into(),
            kind,
        }
    }
}

/// Item type with type-specific data.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Equippable weapon.
    Weapon(WeaponData),

    /// Consumable item (ingredients, medical supplies).
    Consumable,

    /// Utility item.
    Utility,
}

/// Weapon-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponData {
    pub damage: u16,
}

//! Inventory storage for actors.
//!
//! Quantities of one item may be spread across several slots; queries
//! aggregate across all of them and deductions drain slots in order.

use arrayvec::ArrayVec;

use crate::config::MechanicConfig;
use crate::state::ItemHandle;

/// Inventory slot containing an item and its quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventorySlot {
    pub handle: ItemHandle,
    pub quantity: u32,
}

impl InventorySlot {
    pub fn new(handle: ItemHandle, quantity: u32) -> Self {
        Self { handle, quantity }
    }
}

/// Per-actor resource store queried and mutated by the ledger transaction.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryState {
    slots: ArrayVec<InventorySlot, { MechanicConfig::MAX_INVENTORY_SLOTS }>,
}

impl InventoryState {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Total quantity of an item across all slots. Unknown items count as 0.
    pub fn quantity_of(&self, handle: ItemHandle) -> u32 {
        self.slots
            .iter()
            .filter(|s| s.handle == handle)
            .map(|s| s.quantity)
            .sum()
    }

    /// Add `quantity` of an item, merging into an existing slot when one
    /// holds the same item. Returns false when a new slot was needed but the
    /// inventory is full.
    pub fn give(&mut self, handle: ItemHandle, quantity: u32) -> bool {
        if quantity == 0 {
            return true;
        }
        if let Some(slot) = self.slots.iter_mut().find(|s| s.handle == handle) {
            slot.quantity += quantity;
            return true;
        }
        if self.slots.is_full() {
            return false;
        }
        self.slots.push(InventorySlot::new(handle, quantity));
        true
    }

    /// Remove up to `quantity` of an item, draining slots in order and
    /// dropping emptied slots. Returns the amount actually removed.
    pub fn take(&mut self, handle: ItemHandle, quantity: u32) -> u32 {
        let mut remaining = quantity;
        for slot in self.slots.iter_mut().filter(|s| s.handle == handle) {
            let taken = slot.quantity.min(remaining);
            slot.quantity -= taken;
            remaining -= taken;
            if remaining == 0 {
                break;
            }
        }
        self.slots.retain(|s| s.quantity > 0);
        quantity - remaining
    }

    pub fn iter(&self) -> impl Iterator<Item = &InventorySlot> {
        self.slots.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

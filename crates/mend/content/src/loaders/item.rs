//! Item catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use mend_core::{ItemDefinition, ItemHandle, ItemKind, WeaponData};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemDefinition>,
}

/// Loader for item catalogs from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load an item catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemDefinition>> {
        let content = read_file(path)?;
        let catalog: ItemCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        Ok(catalog.items)
    }

    /// Built-in catalog used by tests and hosts without a data directory.
    pub fn defaults() -> Vec<ItemDefinition> {
        vec![
            ItemDefinition::new(
                ItemHandle(1),
                "bow.hunting",
                ItemKind::Weapon(WeaponData { damage: 20 }),
            ),
            ItemDefinition::new(
                ItemHandle(2),
                "crossbow",
                ItemKind::Weapon(WeaponData { damage: 30 }),
            ),
            ItemDefinition::new(
                ItemHandle(3),
                "rifle.bolt",
                ItemKind::Weapon(WeaponData { damage: 50 }),
            ),
            ItemDefinition::new(ItemHandle(4), "medical.syringe", ItemKind::Consumable),
            ItemDefinition::new(ItemHandle(5), "rope", ItemKind::Consumable),
            ItemDefinition::new(ItemHandle(6), "bandage", ItemKind::Consumable),
            ItemDefinition::new(ItemHandle(7), "torch", ItemKind::Utility),
        ]
    }
}

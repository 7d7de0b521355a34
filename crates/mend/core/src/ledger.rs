//! Atomic check-then-commit consumption of catalog requirements.
//!
//! The transaction walks the catalog twice. The first pass only reads: every
//! requirement is checked against the inventory and every unmet one is
//! recorded. Only when the first pass finds no shortfall does the second pass
//! deduct, in the same order. A requirement listed later must never be spent
//! when an earlier check failed, and nothing is spent when a later
//! requirement turns out unavailable.

use crate::catalog::RequirementCatalog;
use crate::state::InventoryState;

/// One unmet requirement, reported in catalog order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shortfall {
    pub shortname: String,
    pub have: u32,
    pub need: u32,
}

/// Consume every catalog requirement from `inventory`, or nothing at all.
///
/// # Errors
///
/// Returns the complete shortfall list (not just the first) so feedback can
/// name everything that is missing. The inventory is untouched on error.
pub fn try_consume(
    catalog: &RequirementCatalog,
    inventory: &mut InventoryState,
) -> Result<(), Vec<Shortfall>> {
    let shortfalls: Vec<Shortfall> = catalog
        .iter()
        .filter_map(|req| {
            let have = inventory.quantity_of(req.handle);
            (have < req.quantity).then(|| Shortfall {
                shortname: req.shortname.clone(),
                have,
                need: req.quantity,
            })
        })
        .collect();

    if !shortfalls.is_empty() {
        return Err(shortfalls);
    }

    for req in catalog.iter() {
        let taken = inventory.take(req.handle, req.quantity);
        debug_assert_eq!(taken, req.quantity, "checked requirement must be takable");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{RequirementCatalog, RequirementSpec};
    use crate::env::{ItemDefinition, ItemKind, ItemOracle};
    use crate::state::ItemHandle;

    const SYRINGE: ItemHandle = ItemHandle(1);
    const ROPE: ItemHandle = ItemHandle(2);

    struct TestItems(Vec<ItemDefinition>);

    impl ItemOracle for TestItems {
        fn definition(&self, handle: ItemHandle) -> Option<&ItemDefinition> {
            self.0.iter().find(|d| d.handle == handle)
        }

        fn find_by_shortname(&self, shortname: &str) -> Option<ItemHandle> {
            self.0
                .iter()
                .find(|d| d.shortname == shortname)
                .map(|d| d.handle)
        }
    }

    fn catalog(specs: &[RequirementSpec]) -> RequirementCatalog {
        let items = TestItems(vec![
            ItemDefinition::new(SYRINGE, "medical.syringe", ItemKind::Consumable),
            ItemDefinition::new(ROPE, "rope", ItemKind::Consumable),
        ]);
        RequirementCatalog::resolve(specs, &items).unwrap()
    }

    fn default_catalog() -> RequirementCatalog {
        catalog(&[
            RequirementSpec::new("medical.syringe", 1),
            RequirementSpec::new("rope", 1),
        ])
    }

    #[test]
    fn consumes_every_requirement_exactly_once() {
        let mut inv = InventoryState::empty();
        inv.give(SYRINGE, 2);
        inv.give(ROPE, 1);

        assert!(try_consume(&default_catalog(), &mut inv).is_ok());
        assert_eq!(inv.quantity_of(SYRINGE), 1);
        assert_eq!(inv.quantity_of(ROPE), 0);
    }

    #[test]
    fn missing_later_requirement_spends_nothing() {
        // syringe is available, rope is not; the syringe must survive
        let mut inv = InventoryState::empty();
        inv.give(SYRINGE, 1);

        let err = try_consume(&default_catalog(), &mut inv).unwrap_err();
        assert_eq!(
            err,
            vec![Shortfall {
                shortname: "rope".into(),
                have: 0,
                need: 1,
            }]
        );
        assert_eq!(inv.quantity_of(SYRINGE), 1);
    }

    #[test]
    fn every_shortfall_is_reported_in_catalog_order() {
        let mut inv = InventoryState::empty();

        let err = try_consume(&default_catalog(), &mut inv).unwrap_err();
        let names: Vec<_> = err.iter().map(|s| s.shortname.as_str()).collect();
        assert_eq!(names, ["medical.syringe", "rope"]);
    }

    #[test]
    fn rejection_is_idempotent() {
        let mut inv = InventoryState::empty();
        inv.give(SYRINGE, 1);

        let first = try_consume(&default_catalog(), &mut inv).unwrap_err();
        let second = try_consume(&default_catalog(), &mut inv).unwrap_err();
        assert_eq!(first, second);
        assert_eq!(inv.quantity_of(SYRINGE), 1);
    }

    #[test]
    fn success_is_monotone_in_inventory() {
        // a superset of a sufficient inventory also succeeds
        let mut sufficient = InventoryState::empty();
        sufficient.give(SYRINGE, 1);
        sufficient.give(ROPE, 1);

        let mut superset = sufficient.clone();
        superset.give(SYRINGE, 4);
        superset.give(ROPE, 2);

        assert!(try_consume(&default_catalog(), &mut sufficient).is_ok());
        assert!(try_consume(&default_catalog(), &mut superset).is_ok());
        assert_eq!(superset.quantity_of(SYRINGE), 4);
        assert_eq!(superset.quantity_of(ROPE), 2);
    }

    #[test]
    fn requirement_spread_across_stacks_is_satisfied() {
        let catalog = catalog(&[RequirementSpec::new("rope", 4)]);
        let mut inv = InventoryState::empty();
        inv.give(ROPE, 4);

        assert!(try_consume(&catalog, &mut inv).is_ok());
        assert_eq!(inv.quantity_of(ROPE), 0);
    }

    #[test]
    fn empty_catalog_always_succeeds() {
        let mut inv = InventoryState::empty();
        assert!(try_consume(&catalog(&[]), &mut inv).is_ok());
    }
}

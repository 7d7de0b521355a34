//! Oracle implementations over loaded content.

use mend_core::{
    HeldButtons, ItemDefinition, ItemHandle, ItemOracle, RequirementCatalog, SettingsSnapshot,
    WeaponMatcher,
};
use mend_content::MechanicSettings;

use crate::api::RuntimeError;

/// Item oracle over an in-memory definition list.
#[derive(Clone, Debug, Default)]
pub struct StaticItemOracle {
    definitions: Vec<ItemDefinition>,
}

impl StaticItemOracle {
    pub fn new(definitions: Vec<ItemDefinition>) -> Self {
        Self { definitions }
    }
}

impl ItemOracle for StaticItemOracle {
    fn definition(&self, handle: ItemHandle) -> Option<&ItemDefinition> {
        self.definitions.iter().find(|d| d.handle == handle)
    }

    fn find_by_shortname(&self, shortname: &str) -> Option<ItemHandle> {
        self.definitions
            .iter()
            .find(|d| d.shortname == shortname)
            .map(|d| d.handle)
    }
}

/// Turn loaded settings into the read-only snapshot the core consumes.
///
/// This is where configuration fails closed: an unresolvable ingredient, a
/// zero quantity, or an unknown trigger name prevents the snapshot (and with
/// it the interceptor) from being built at all.
pub fn build_snapshot(
    settings: &MechanicSettings,
    items: &(impl ItemOracle + ?Sized),
) -> Result<SettingsSnapshot, RuntimeError> {
    let catalog = RequirementCatalog::resolve(&settings.arrow_ingredients, items)?;

    let trigger = HeldButtons::from_trigger_name(&settings.trigger_input)
        .ok_or_else(|| RuntimeError::UnknownTriggerInput(settings.trigger_input.clone()))?;

    Ok(SettingsSnapshot {
        catalog,
        instant_heal: settings.instant_health_increase,
        heal_over_time: settings.health_increase_over_time,
        revive_enabled: settings.can_revive_wounded,
        trigger,
        trigger_label: settings.trigger_input.clone(),
        weapon_matcher: WeaponMatcher::new(settings.eligible_weapon_class.clone()),
        full_health_policy: settings.heal_full_health_targets,
    })
}

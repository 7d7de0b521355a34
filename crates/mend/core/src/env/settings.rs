use crate::catalog::RequirementCatalog;
use crate::event::HeldButtons;

/// Read-only settings snapshot exposed to the pipeline.
///
/// Persistence, migration, and file formats are the content crate's concern;
/// the pipeline only ever sees this trait.
pub trait SettingsOracle: Send + Sync {
    /// Ingredients consumed per triggered heal, in evaluation order.
    fn requirement_catalog(&self) -> &RequirementCatalog;

    /// Health restored immediately on the target.
    fn instant_heal(&self) -> u32;

    /// Health restored over one regeneration window.
    fn heal_over_time(&self) -> u32;

    /// Whether a wounded target is revived as part of the heal.
    fn revive_enabled(&self) -> bool;

    /// Button that must be held at the moment of the hit.
    fn trigger_input(&self) -> HeldButtons;

    /// Weapon class filter for qualifying hits.
    fn weapon_matcher(&self) -> &WeaponMatcher;

    /// Policy for targets that are already at full health and not wounded.
    fn full_health_policy(&self) -> FullHealthPolicy;
}

/// What to do when the target has nothing to heal and nothing to revive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FullHealthPolicy {
    /// Consume ingredients and apply the heal anyway; the instant portion
    /// clamps to zero. Matches the classic behavior.
    #[default]
    Accept,

    /// Treat the hit as ineligible so no ingredients are wasted.
    Reject,
}

/// Substring class match over weapon shortnames, e.g. `"bow"` matches both
/// `"bow.hunting"` and `"crossbow"`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponMatcher {
    class: String,
}

impl WeaponMatcher {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
        }
    }

    pub fn matches(&self, shortname: &str) -> bool {
        shortname.contains(&self.class)
    }

    pub fn class(&self) -> &str {
        &self.class
    }
}

/// Plain-data implementation of [`SettingsOracle`].
///
/// Built once from loaded configuration, then shared read-only for the
/// lifetime of the mechanic. Immutable for the duration of any transaction.
#[derive(Clone, Debug)]
pub struct SettingsSnapshot {
    pub catalog: RequirementCatalog,
    pub instant_heal: u32,
    pub heal_over_time: u32,
    pub revive_enabled: bool,
    pub trigger: HeldButtons,
    /// Display name of the trigger input, for usage hints.
    pub trigger_label: String,
    pub weapon_matcher: WeaponMatcher,
    pub full_health_policy: FullHealthPolicy,
}

impl SettingsOracle for SettingsSnapshot {
    fn requirement_catalog(&self) -> &RequirementCatalog {
        &self.catalog
    }

    fn instant_heal(&self) -> u32 {
        self.instant_heal
    }

    fn heal_over_time(&self) -> u32 {
        self.heal_over_time
    }

    fn revive_enabled(&self) -> bool {
        self.revive_enabled
    }

    fn trigger_input(&self) -> HeldButtons {
        self.trigger
    }

    fn weapon_matcher(&self) -> &WeaponMatcher {
        &self.weapon_matcher
    }

    fn full_health_policy(&self) -> FullHealthPolicy {
        self.full_health_policy
    }
}

//! Persisted settings format and versioned migration.

use serde::{Deserialize, Serialize};

use mend_core::{FullHealthPolicy, RequirementSpec};

/// Version stamped into freshly written settings files.
pub const CONFIG_VERSION: &str = "3.0.0";

/// Settings files older than this carry incompatible semantics and are
/// replaced by defaults instead of being patched field by field.
const BREAKING_VERSION: (u32, u32, u32) = (2, 0, 0);

/// On-disk tunables for the mechanic, one file per server.
///
/// Unknown future fields are tolerated; missing fields fall back to the
/// defaults so compatible upgrades never require a manual edit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MechanicSettings {
    pub version: String,
    pub instant_health_increase: u32,
    pub health_increase_over_time: u32,
    pub can_revive_wounded: bool,
    pub heal_full_health_targets: FullHealthPolicy,
    /// Name of the button that must be held, see `HeldButtons::from_trigger_name`.
    pub trigger_input: String,
    /// Substring class filter over weapon shortnames.
    pub eligible_weapon_class: String,
    pub arrow_ingredients: Vec<RequirementSpec>,
}

impl Default for MechanicSettings {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            instant_health_increase: 15,
            health_increase_over_time: 20,
            can_revive_wounded: true,
            heal_full_health_targets: FullHealthPolicy::Accept,
            trigger_input: "use".to_string(),
            eligible_weapon_class: "bow".to_string(),
            arrow_ingredients: vec![
                RequirementSpec::new("medical.syringe", 1),
                RequirementSpec::new("rope", 1),
            ],
        }
    }
}

impl MechanicSettings {
    /// Bring loaded settings up to [`CONFIG_VERSION`].
    ///
    /// Files older than the breaking version (or with an unparsable stamp)
    /// are replaced wholesale by defaults; newer-but-stale stamps are just
    /// refreshed. Returns true when anything changed and the file should be
    /// rewritten.
    pub fn migrate(&mut self) -> bool {
        if self.version == CONFIG_VERSION {
            return false;
        }
        match parse_version(&self.version) {
            Some(version) if version >= BREAKING_VERSION => {
                self.version = CONFIG_VERSION.to_string();
            }
            _ => *self = Self::default(),
        }
        true
    }
}

fn parse_version(version: &str) -> Option<(u32, u32, u32)> {
    let mut parts = version.split('.').map(|p| p.parse::<u32>());
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(Ok(major)), Some(Ok(minor)), Some(Ok(patch)), None) => Some((major, minor, patch)),
        _ => None,
    }
}

//! Compile-time capacity limits for core state containers.

/// Fixed capacities used as `ArrayVec` bounds throughout the crate.
///
/// Runtime tunables (heal amounts, ingredient lists, trigger input) live in
/// the settings oracle; these constants only bound memory, never behavior.
pub struct MechanicConfig;

impl MechanicConfig {
    /// Maximum number of resource requirements in one catalog.
    pub const MAX_REQUIREMENTS: usize = 8;

    /// Maximum number of inventory slots tracked per actor.
    pub const MAX_INVENTORY_SLOTS: usize = 24;

    /// Ticks a health-over-time effect runs for. One feedback window: the
    /// configured over-time amount is the rate across this duration.
    pub const REGEN_DURATION_TICKS: u64 = 10;
}

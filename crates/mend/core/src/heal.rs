//! Heal/revive application. Runs only after the ledger committed.
//!
//! This stage performs no resource checks of its own; it cannot fail for
//! resource reasons. The instant portion clamps to the target's maximum, the
//! over-time portion installs a regeneration effect, and revival clears the
//! wounded status in the same call so a revived target always ends active
//! and recovering.

use crate::state::{ActorState, EntityId, RegenEffect, Tick};

/// Amounts and flags for one heal application, taken from settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HealPlan {
    pub instant: u32,
    pub over_time_rate: u32,
    pub allow_revive: bool,
}

/// What one heal actually did to the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealApplied {
    pub target: EntityId,
    /// Health restored immediately, after clamping.
    pub instant_applied: u32,
    /// Regeneration rate installed for the current window.
    pub over_time_applied: u32,
    pub wounded_cleared: bool,
}

/// Apply `plan` to the target actor.
pub fn apply(actor: &mut ActorState, plan: &HealPlan, now: Tick) -> HealApplied {
    let instant_applied = actor.health.restore(plan.instant);

    let over_time_applied = plan.over_time_rate;
    if over_time_applied > 0 {
        actor.add_regen(RegenEffect::starting_at(now, over_time_applied), now);
    }

    let wounded_cleared = plan.allow_revive && actor.wounded;
    if wounded_cleared {
        actor.wounded = false;
    }

    HealApplied {
        target: actor.id,
        instant_applied,
        over_time_applied,
        wounded_cleared,
    }
}

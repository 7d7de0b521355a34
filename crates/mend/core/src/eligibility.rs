//! Pure gate deciding whether a hit qualifies for the heal pipeline.
//!
//! Evaluation never mutates inventory or health state; it is advisory gating
//! for the ledger transaction. Checks run in a fixed order so rejection
//! reasons are deterministic.

use crate::env::{AuthorizationOracle, FullHealthPolicy, ItemKind, ItemOracle, SettingsOracle};
use crate::error::{ErrorSeverity, MechanicError};
use crate::event::AttackEvent;
use crate::state::WorldState;

/// Why a hit did not qualify. No side effects were performed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error, strum::IntoStaticStr)]
pub enum RejectReason {
    #[error("attacker lacks permission to use mend arrows")]
    NotAuthorized,

    #[error("attacker is no longer in the world")]
    AttackerMissing,

    #[error("hit entity is not a healable actor")]
    TargetMissing,

    #[error("automated actors cannot be mended")]
    TargetIsNpc,

    #[error("attackers cannot mend themselves")]
    TargetIsAttacker,

    #[error("weapon is not part of the eligible class")]
    WeaponMismatch,

    #[error("trigger input was not held during the hit")]
    TriggerNotHeld,

    #[error("target is already at full health")]
    TargetAlreadyHealthy,
}

impl MechanicError for RejectReason {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        self.into()
    }
}

/// Decide whether `event` qualifies for a heal.
///
/// Check order mirrors the cheapest-first rejection chain: authorization,
/// actor validity, weapon class, held input, then the full-health policy.
pub fn evaluate(
    event: &AttackEvent,
    world: &WorldState,
    settings: &(impl SettingsOracle + ?Sized),
    items: &(impl ItemOracle + ?Sized),
    auth: &(impl AuthorizationOracle + ?Sized),
) -> Result<(), RejectReason> {
    if !auth.is_authorized(event.attacker) {
        return Err(RejectReason::NotAuthorized);
    }
    if world.actor(event.attacker).is_none() {
        return Err(RejectReason::AttackerMissing);
    }

    let target = world
        .actor(event.target)
        .ok_or(RejectReason::TargetMissing)?;
    if target.is_npc {
        return Err(RejectReason::TargetIsNpc);
    }
    if event.target == event.attacker {
        return Err(RejectReason::TargetIsAttacker);
    }

    // Unknown weapon handles fail closed as a class mismatch.
    let qualifying_weapon = items.definition(event.weapon).is_some_and(|def| {
        matches!(def.kind, ItemKind::Weapon(_)) && settings.weapon_matcher().matches(&def.shortname)
    });
    if !qualifying_weapon {
        return Err(RejectReason::WeaponMismatch);
    }

    if !event.held.contains(settings.trigger_input()) {
        return Err(RejectReason::TriggerNotHeld);
    }

    if settings.full_health_policy() == FullHealthPolicy::Reject
        && target.health.is_full()
        && !target.wounded
    {
        return Err(RejectReason::TargetAlreadyHealthy);
    }

    Ok(())
}

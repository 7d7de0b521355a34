//! Orchestration of one attack event through the heal pipeline.
//!
//! Flow: eligibility gate (no side effects) → ledger transaction (all-or-
//! nothing consumption) → heal application (side effects committed). Any
//! rejection leaves all state unchanged, with one documented exception:
//! [`HealRejection::TargetUnavailable`] fires after the ledger committed, so
//! ingredients are gone even though no heal landed. There is no refund; the
//! caller reports the loss to the attacker.

use crate::eligibility::{self, RejectReason};
use crate::env::{MechanicEnv, OracleError};
use crate::error::{ErrorSeverity, MechanicError};
use crate::event::AttackEvent;
use crate::heal::{self, HealApplied, HealPlan};
use crate::ledger::{self, Shortfall};
use crate::state::{EntityId, Tick, WorldState};

/// Terminal rejection branches of one event, per the error taxonomy.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error, strum::IntoStaticStr)]
pub enum HealRejection {
    /// The hit did not qualify; nothing was checked against the inventory.
    #[error("hit not eligible: {0}")]
    NotEligible(RejectReason),

    /// One or more requirements were unmet; nothing was consumed.
    #[error("missing ingredients for {} requirement(s)", .0.len())]
    InsufficientResources(Vec<Shortfall>),

    /// The target vanished after ingredients were consumed. Committed but
    /// effect-less; ingredients are not refunded.
    #[error("target vanished before the heal could land")]
    TargetUnavailable,
}

impl MechanicError for HealRejection {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        self.into()
    }
}

/// Result of one fully handled event: the heal that landed, or why not.
pub type HealOutcome = Result<HealApplied, HealRejection>;

/// Run one attack event to completion.
///
/// Synchronous and run-to-completion: the event is fully decided before the
/// caller can hand over the next one, so the check-then-commit transaction
/// never races against itself for the same inventory.
///
/// # Errors
///
/// `Err(OracleError)` means the environment is mis-wired (a missing oracle)
/// and no part of the event was processed.
pub fn handle_attack(
    event: &AttackEvent,
    world: &mut WorldState,
    env: &MechanicEnv<'_>,
) -> Result<HealOutcome, OracleError> {
    let settings = env.settings()?;
    let items = env.items()?;
    let auth = env.auth()?;

    if let Err(reason) = eligibility::evaluate(event, world, settings, items, auth) {
        return Ok(Err(HealRejection::NotEligible(reason)));
    }

    let now = world.clock;
    // Eligibility just confirmed the attacker; a miss here is still a clean
    // rejection with nothing consumed.
    let Some(attacker) = world.actor_mut(event.attacker) else {
        return Ok(Err(HealRejection::NotEligible(RejectReason::AttackerMissing)));
    };
    if let Err(shortfalls) = ledger::try_consume(settings.requirement_catalog(), &mut attacker.inventory)
    {
        return Ok(Err(HealRejection::InsufficientResources(shortfalls)));
    }

    let plan = HealPlan {
        instant: settings.instant_heal(),
        over_time_rate: settings.heal_over_time(),
        allow_revive: settings.revive_enabled(),
    };
    Ok(apply_heal_to(world, event.target, &plan, now))
}

/// Post-commit stage: re-resolve the target and apply the heal.
///
/// Split out so hosts that resolve actors through their own registries can
/// report a vanished target the same way the pipeline does.
pub fn apply_heal_to(
    world: &mut WorldState,
    target: EntityId,
    plan: &HealPlan,
    now: Tick,
) -> HealOutcome {
    let Some(actor) = world.actor_mut(target) else {
        return Err(HealRejection::TargetUnavailable);
    };
    Ok(heal::apply(actor, plan, now))
}

//! Health-over-time effect installed by the heal applier.
//!
//! The host's metabolism loop drains the effect; this crate only records the
//! rate and expiry. Effects are expired when `current_tick >= expires_at`.

use crate::config::MechanicConfig;
use crate::state::Tick;

/// Active health regeneration on an actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegenEffect {
    /// Health restored across one regeneration window.
    pub rate: u32,
    /// Tick at which this effect expires.
    pub expires_at: Tick,
}

impl RegenEffect {
    /// Create an effect starting at `now`, running for one regeneration
    /// window.
    pub fn starting_at(now: Tick, rate: u32) -> Self {
        Self {
            rate,
            expires_at: now + MechanicConfig::REGEN_DURATION_TICKS,
        }
    }

    /// True while the effect has not yet expired.
    pub fn is_active(&self, current_tick: Tick) -> bool {
        self.expires_at > current_tick
    }

    /// Fold another application into this one: rates accumulate, expiry
    /// extends to the later of the two windows.
    pub fn stack(&mut self, other: RegenEffect) {
        self.rate += other.rate;
        self.expires_at = self.expires_at.max(other.expires_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effect_expires_after_window() {
        let effect = RegenEffect::starting_at(Tick(5), 20);
        assert!(effect.is_active(Tick(5)));
        assert!(effect.is_active(Tick(5 + MechanicConfig::REGEN_DURATION_TICKS - 1)));
        assert!(!effect.is_active(Tick(5 + MechanicConfig::REGEN_DURATION_TICKS)));
    }

    #[test]
    fn stacking_accumulates_rate_and_extends_expiry() {
        let mut effect = RegenEffect::starting_at(Tick(0), 20);
        effect.stack(RegenEffect::starting_at(Tick(4), 20));

        assert_eq!(effect.rate, 40);
        assert_eq!(effect.expires_at, Tick(4 + MechanicConfig::REGEN_DURATION_TICKS));
    }
}

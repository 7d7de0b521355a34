//! Attack hook: the single entry point the host calls per hit.
//!
//! The interceptor owns the wired-up oracles and sinks, drives the core
//! pipeline, and performs the reporting step: exactly one feedback message
//! per terminal branch, effect playback on success only, and a decision for
//! the host on whether to cancel the hit's normal damage.

use mend_core::{
    AttackEvent, AuthorizationOracle, Env, EntityId, HealRejection, ItemHandle, ItemKind,
    ItemOracle, MechanicEnv, MechanicError, SettingsSnapshot, Shortfall, WorldState, handle_attack,
};

use crate::messages::{MessageCatalog, MessageCode};
use crate::sinks::{EffectSink, FeedbackSink};

/// Effect played at the target when a heal lands.
pub const FX_MEND_FRIEND: &str = "fx/mend/inject_friend";

/// What the host should do with the intercepted hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitDecision {
    /// The hit became a heal; suppress the weapon's normal damage.
    CancelDamage,
    /// Not our hit; let normal damage processing continue.
    PassThrough,
}

/// Wired-up mechanic, constructed once per loaded configuration.
///
/// Construction requires a validated [`SettingsSnapshot`], so invalid
/// configuration disables the mechanic instead of failing per event.
pub struct AttackInterceptor {
    settings: SettingsSnapshot,
    items: Box<dyn ItemOracle>,
    auth: Box<dyn AuthorizationOracle>,
    feedback: Box<dyn FeedbackSink>,
    effects: Box<dyn EffectSink>,
    messages: MessageCatalog,
}

impl AttackInterceptor {
    pub fn new(
        settings: SettingsSnapshot,
        items: Box<dyn ItemOracle>,
        auth: Box<dyn AuthorizationOracle>,
        feedback: Box<dyn FeedbackSink>,
        effects: Box<dyn EffectSink>,
    ) -> Self {
        Self {
            settings,
            items,
            auth,
            feedback,
            effects,
            messages: MessageCatalog::default(),
        }
    }

    /// Replace the message catalog (e.g. after loading overrides).
    pub fn with_messages(mut self, messages: MessageCatalog) -> Self {
        self.messages = messages;
        self
    }

    /// Handle one hit, run to completion.
    pub fn on_player_attack(&self, world: &mut WorldState, event: &AttackEvent) -> HitDecision {
        let env: MechanicEnv<'_> = Env::with_all(&self.settings, &*self.items, &*self.auth);

        match handle_attack(event, world, &env) {
            Ok(Ok(applied)) => {
                tracing::info!(
                    attacker = %event.attacker,
                    target = %applied.target,
                    instant = applied.instant_applied,
                    over_time = applied.over_time_applied,
                    revived = applied.wounded_cleared,
                    cancelled_damage = event.raw_damage,
                    "heal arrow landed"
                );
                self.notify(
                    event.attacker,
                    MessageCode::PlayerHealed,
                    &[applied.target.to_string(), applied.instant_applied.to_string()],
                );
                self.effects.play_effect(FX_MEND_FRIEND, applied.target);
                HitDecision::CancelDamage
            }
            Ok(Err(rejection)) => {
                tracing::debug!(
                    attacker = %event.attacker,
                    code = rejection.error_code(),
                    severity = rejection.severity().as_str(),
                    "heal arrow rejected"
                );
                self.report_rejection(event.attacker, &rejection);
                HitDecision::PassThrough
            }
            Err(oracle) => {
                // Unreachable when constructed through the normal wiring;
                // surfaced loudly instead of panicking mid-event.
                tracing::error!(code = oracle.error_code(), "mechanic mis-wired");
                HitDecision::PassThrough
            }
        }
    }

    /// Usage hint when an actor switches to an eligible weapon.
    pub fn on_active_item_changed(&self, actor: EntityId, new_item: ItemHandle) {
        if !self.auth.is_authorized(actor) {
            return;
        }
        let Some(definition) = self.items.definition(new_item) else {
            return;
        };
        let eligible = matches!(definition.kind, ItemKind::Weapon(_))
            && self.settings.weapon_matcher.matches(&definition.shortname);
        if eligible {
            self.notify(
                actor,
                MessageCode::HealArrowUsage,
                &[self.settings.trigger_label.clone()],
            );
        }
    }

    fn report_rejection(&self, attacker: EntityId, rejection: &HealRejection) {
        match rejection {
            HealRejection::NotEligible(reason) => {
                self.notify(attacker, MessageCode::NotEligible, &[reason.to_string()]);
            }
            HealRejection::InsufficientResources(shortfalls) => {
                self.notify(
                    attacker,
                    MessageCode::InsufficientIngredients,
                    &[format_shortfalls(shortfalls)],
                );
            }
            HealRejection::TargetUnavailable => {
                self.notify(attacker, MessageCode::TargetLost, &[]);
            }
        }
    }

    fn notify(&self, actor: EntityId, code: MessageCode, args: &[String]) {
        let text = self.messages.render(code, args);
        self.feedback.notify(actor, code, &text);
    }
}

/// `"rope (0/1), medical.syringe (1/2)"` in catalog order.
fn format_shortfalls(shortfalls: &[Shortfall]) -> String {
    shortfalls
        .iter()
        .map(|s| format!("{} ({}/{})", s.shortname, s.have, s.need))
        .collect::<Vec<_>>()
        .join(", ")
}

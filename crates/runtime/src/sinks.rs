//! Outbound channels for feedback text and effect playback.
//!
//! The host decides how messages reach players and how effects are rendered;
//! the runtime only needs somewhere to hand them. Sinks are injected into the
//! interceptor rather than read from ambient state.

use std::sync::{Arc, Mutex};

use mend_core::EntityId;

use crate::messages::MessageCode;

/// Delivers rendered feedback text to an actor.
pub trait FeedbackSink: Send + Sync {
    fn notify(&self, actor: EntityId, code: MessageCode, text: &str);
}

/// Plays a visual/audio effect at an actor.
pub trait EffectSink: Send + Sync {
    fn play_effect(&self, effect: &str, at: EntityId);
}

/// Sink that forwards everything to the tracing subscriber.
///
/// Default for headless hosts and demos; real hosts provide their own
/// delivery.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl FeedbackSink for TracingSink {
    fn notify(&self, actor: EntityId, code: MessageCode, text: &str) {
        tracing::info!(%actor, %code, text, "feedback");
    }
}

impl EffectSink for TracingSink {
    fn play_effect(&self, effect: &str, at: EntityId) {
        tracing::info!(%at, effect, "effect");
    }
}

/// One delivered feedback message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub actor: EntityId,
    pub code: MessageCode,
    pub text: String,
}

/// One requested effect playback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectPlayback {
    pub effect: String,
    pub at: EntityId,
}

#[derive(Debug, Default)]
struct Recorded {
    notifications: Vec<Notification>,
    effects: Vec<EffectPlayback>,
}

/// Sink that records everything it receives. Test double; clones share the
/// same buffer so tests can keep a handle while the interceptor owns one.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    inner: Arc<Mutex<Recorded>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.inner.lock().unwrap().notifications.clone()
    }

    pub fn effects(&self) -> Vec<EffectPlayback> {
        self.inner.lock().unwrap().effects.clone()
    }
}

impl FeedbackSink for RecordingSink {
    fn notify(&self, actor: EntityId, code: MessageCode, text: &str) {
        self.inner.lock().unwrap().notifications.push(Notification {
            actor,
            code,
            text: text.to_string(),
        });
    }
}

impl EffectSink for RecordingSink {
    fn play_effect(&self, effect: &str, at: EntityId) {
        self.inner.lock().unwrap().effects.push(EffectPlayback {
            effect: effect.to_string(),
            at,
        });
    }
}

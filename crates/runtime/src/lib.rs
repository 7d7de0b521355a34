//! Host-facing orchestration for the mend-arrow mechanic.
//!
//! The runtime wires loaded content into core oracles, owns the permission
//! registry and message catalog, and exposes [`AttackInterceptor`] as the
//! single entry point the host calls from its attack hook. Everything is
//! synchronous: each event is handled to completion inside the triggering
//! call, so transactions never interleave.

pub mod api;
pub mod interceptor;
pub mod messages;
pub mod oracle;
pub mod permissions;
pub mod sinks;

pub use api::RuntimeError;
pub use interceptor::{AttackInterceptor, FX_MEND_FRIEND, HitDecision};
pub use messages::{MessageCatalog, MessageCode};
pub use oracle::{StaticItemOracle, build_snapshot};
pub use permissions::{PermissionRegistry, USE_PERMISSION};
pub use sinks::{EffectPlayback, EffectSink, FeedbackSink, Notification, RecordingSink, TracingSink};

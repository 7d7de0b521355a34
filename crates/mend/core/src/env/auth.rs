use crate::state::EntityId;

/// Capability check keyed by actor identity.
pub trait AuthorizationOracle: Send + Sync {
    fn is_authorized(&self, actor: EntityId) -> bool;
}

/// Grants every actor the capability. Test and single-player default.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllowAll;

impl AuthorizationOracle for AllowAll {
    fn is_authorized(&self, _actor: EntityId) -> bool {
        true
    }
}

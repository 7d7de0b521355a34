//! Permission registry backing the authorization oracle.
//!
//! Hosts usually bridge this to their own permission system; the registry is
//! the standalone implementation used by tests and small servers. It is
//! injected explicitly, never read from a global.

use std::collections::{HashMap, HashSet};

use mend_core::{AuthorizationOracle, EntityId};

use crate::api::RuntimeError;

/// Permission gating use of the mechanic.
pub const USE_PERMISSION: &str = "mendarrows.use";

/// Named permission sets with per-actor grants.
#[derive(Clone, Debug)]
pub struct PermissionRegistry {
    grants: HashMap<String, HashSet<EntityId>>,
}

impl Default for PermissionRegistry {
    fn default() -> Self {
        let mut registry = Self {
            grants: HashMap::new(),
        };
        registry.register(USE_PERMISSION);
        registry
    }
}

impl PermissionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a permission name. Idempotent.
    pub fn register(&mut self, name: &str) {
        self.grants.entry(name.to_string()).or_default();
    }

    /// Grant a registered permission to an actor.
    pub fn grant(&mut self, name: &str, actor: EntityId) -> Result<(), RuntimeError> {
        self.grants
            .get_mut(name)
            .ok_or_else(|| RuntimeError::UnknownPermission(name.to_string()))?
            .insert(actor);
        Ok(())
    }

    /// Revoke a registered permission from an actor.
    pub fn revoke(&mut self, name: &str, actor: EntityId) -> Result<(), RuntimeError> {
        self.grants
            .get_mut(name)
            .ok_or_else(|| RuntimeError::UnknownPermission(name.to_string()))?
            .remove(&actor);
        Ok(())
    }

    pub fn has(&self, name: &str, actor: EntityId) -> bool {
        self.grants
            .get(name)
            .is_some_and(|granted| granted.contains(&actor))
    }
}

impl AuthorizationOracle for PermissionRegistry {
    fn is_authorized(&self, actor: EntityId) -> bool {
        self.has(USE_PERMISSION, actor)
    }
}

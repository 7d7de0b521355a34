//! Traits describing the collaborators the pipeline reads from.
//!
//! Oracles expose configuration, the host item catalog, and authorization
//! lookups. The [`Env`] aggregate bundles them so the pipeline can access
//! everything it needs without hard coupling to concrete implementations.
mod auth;
mod error;
mod items;
mod settings;

pub use auth::{AllowAll, AuthorizationOracle};
pub use error::OracleError;
pub use items::{ItemDefinition, ItemKind, ItemOracle, WeaponData};
pub use settings::{FullHealthPolicy, SettingsOracle, SettingsSnapshot, WeaponMatcher};

/// Aggregates read-only oracles required by the heal pipeline.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, S, I, A>
where
    S: SettingsOracle + ?Sized,
    I: ItemOracle + ?Sized,
    A: AuthorizationOracle + ?Sized,
{
    settings: Option<&'a S>,
    items: Option<&'a I>,
    auth: Option<&'a A>,
}

pub type MechanicEnv<'a> = Env<
    'a,
    dyn SettingsOracle + 'a,
    dyn ItemOracle + 'a,
    dyn AuthorizationOracle + 'a,
>;

impl<'a, S, I, A> Env<'a, S, I, A>
where
    S: SettingsOracle + ?Sized,
    I: ItemOracle + ?Sized,
    A: AuthorizationOracle + ?Sized,
{
    pub fn new(settings: Option<&'a S>, items: Option<&'a I>, auth: Option<&'a A>) -> Self {
        Self {
            settings,
            items,
            auth,
        }
    }

    pub fn with_all(settings: &'a S, items: &'a I, auth: &'a A) -> Self {
        Self::new(Some(settings), Some(items), Some(auth))
    }

    pub fn empty() -> Self {
        Self {
            settings: None,
            items: None,
            auth: None,
        }
    }

    /// Returns the settings oracle, or an error if not available.
    pub fn settings(&self) -> Result<&'a S, OracleError> {
        self.settings.ok_or(OracleError::SettingsNotAvailable)
    }

    /// Returns the item oracle, or an error if not available.
    pub fn items(&self) -> Result<&'a I, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }

    /// Returns the authorization oracle, or an error if not available.
    pub fn auth(&self) -> Result<&'a A, OracleError> {
        self.auth.ok_or(OracleError::AuthNotAvailable)
    }
}

//! Resource requirement catalog: what one triggered heal consumes.
//!
//! Requirements are resolved against the item oracle once, at configuration
//! load. A shortname that does not exist in the host catalog or a
//! non-positive quantity fails resolution closed; the mechanic must not
//! activate with a catalog it cannot fully satisfy the semantics of.

use arrayvec::ArrayVec;

use crate::config::MechanicConfig;
use crate::env::ItemOracle;
use crate::error::{ErrorSeverity, MechanicError};
use crate::state::ItemHandle;

/// Unresolved requirement as written in configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RequirementSpec {
    pub shortname: String,
    pub amount: u32,
}

impl RequirementSpec {
    pub fn new(shortname: impl Into<String>, amount: u32) -> Self {
        Self {
            shortname: shortname.into(),
            amount,
        }
    }
}

/// One resolved requirement: a known item and a positive quantity.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceRequirement {
    pub handle: ItemHandle,
    pub shortname: String,
    pub quantity: u32,
}

/// Ordered requirement list; insertion order is evaluation and consumption
/// order. Immutable after resolution.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RequirementCatalog {
    requirements: ArrayVec<ResourceRequirement, { MechanicConfig::MAX_REQUIREMENTS }>,
}

impl RequirementCatalog {
    /// Validate and resolve configured requirements against the item oracle.
    ///
    /// # Errors
    ///
    /// Fails closed on the first invalid entry: zero quantity, unknown
    /// shortname, or too many requirements.
    pub fn resolve(
        specs: &[RequirementSpec],
        items: &(impl ItemOracle + ?Sized),
    ) -> Result<Self, CatalogError> {
        let mut requirements = ArrayVec::new();

        for spec in specs {
            if spec.amount == 0 {
                return Err(CatalogError::ZeroQuantity {
                    shortname: spec.shortname.clone(),
                });
            }
            let handle = items.find_by_shortname(&spec.shortname).ok_or_else(|| {
                CatalogError::UnknownResource {
                    shortname: spec.shortname.clone(),
                }
            })?;
            requirements
                .try_push(ResourceRequirement {
                    handle,
                    shortname: spec.shortname.clone(),
                    quantity: spec.amount,
                })
                .map_err(|_| CatalogError::TooManyRequirements {
                    limit: MechanicConfig::MAX_REQUIREMENTS,
                })?;
        }

        Ok(Self { requirements })
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourceRequirement> {
        self.requirements.iter()
    }

    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}

/// Errors that make a requirement catalog unusable.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error, strum::IntoStaticStr)]
pub enum CatalogError {
    #[error("requirement '{shortname}' has zero quantity")]
    ZeroQuantity { shortname: String },

    #[error("requirement '{shortname}' does not resolve to a known item")]
    UnknownResource { shortname: String },

    #[error("catalog exceeds the {limit} requirement limit")]
    TooManyRequirements { limit: usize },
}

impl MechanicError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        self.into()
    }
}

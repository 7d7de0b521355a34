//! Runtime error surface.

use mend_core::{CatalogError, ErrorSeverity, MechanicError};

/// Errors raised while wiring the mechanic together.
///
/// All of these are fatal at setup time: the interceptor is never
/// constructed from invalid configuration, so per-event handling cannot hit
/// them. Bad config disables the mechanic; it does not fail per shot.
#[derive(Debug, thiserror::Error, strum::IntoStaticStr)]
pub enum RuntimeError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] CatalogError),

    #[error("unknown trigger input '{0}'")]
    UnknownTriggerInput(String),

    #[error("unknown permission '{0}'")]
    UnknownPermission(String),

    #[error("malformed message overrides: {0}")]
    MalformedMessages(#[from] serde_json::Error),
}

impl MechanicError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        self.into()
    }
}

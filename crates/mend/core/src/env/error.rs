use crate::error::{ErrorSeverity, MechanicError};

/// Errors raised when a required oracle was not provided.
///
/// These indicate wiring bugs, not gameplay rejections: an [`crate::env::Env`]
/// missing an oracle must never reach event handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error, strum::IntoStaticStr)]
pub enum OracleError {
    #[error("settings oracle not available")]
    SettingsNotAvailable,

    #[error("item oracle not available")]
    ItemsNotAvailable,

    #[error("authorization oracle not available")]
    AuthNotAvailable,
}

impl MechanicError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        self.into()
    }
}

//! Common error infrastructure for mend-core.
//!
//! Domain-specific errors (e.g., [`RejectReason`](crate::eligibility::RejectReason),
//! [`CatalogError`](crate::catalog::CatalogError)) are defined in their
//! respective modules alongside the logic they guard. This module provides the
//! shared classification used to decide how a failure is handled and logged.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the event is rejected, state is untouched, and the
    /// attacker is notified. The next event is handled normally.
    ///
    /// Examples: trigger input not held, missing ingredients
    Recoverable,

    /// Fatal error - invalid wiring or configuration; the mechanic must not
    /// activate until it is fixed.
    ///
    /// Examples: requirement with zero quantity, missing oracle
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is recoverable within normal event handling.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all mend-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Derive `strum::IntoStaticStr` and delegate `error_code` to it
/// - Classify severity based on recoverability, not impact
pub trait MechanicError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for error categorization, metrics, and testing.
    fn error_code(&self) -> &'static str;
}

//! Common error infrastructure for watch-core.
//!
//! Empty results (no eligible regions, nothing ready) are never errors; they are
//! the normal "nothing to show" state and surface as empty collections.
//! Errors here describe refreshes that could not complete.

use crate::env::{ItemId, OracleError};

/// Severity level of an error, used to pick a logging level and a recovery path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// The refresh is skipped; cached state stays as it was.
    Recoverable,

    /// The monitor cannot operate (e.g. host wiring failed).
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all errors produced by the watch crates.
pub trait WatchError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier for the variant, handy for log filtering and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised while refreshing a monitor.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MonitorError {
    /// The item catalog has no entry for an identifier found in the world.
    #[error("no display name for {0}")]
    UnknownItem(ItemId),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl WatchError for MonitorError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            MonitorError::UnknownItem(_) => ErrorSeverity::Recoverable,
            MonitorError::Oracle(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            MonitorError::UnknownItem(_) => "MONITOR_UNKNOWN_ITEM",
            MonitorError::Oracle(e) => e.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::RegionId;

    #[test]
    fn oracle_errors_keep_their_code_when_wrapped() {
        let err: MonitorError = OracleError::RegionNotFound(RegionId(4)).into();
        assert_eq!(err.error_code(), "ORACLE_REGION_NOT_FOUND");
        assert!(err.severity().is_recoverable());
        assert_eq!(err.to_string(), "region#4 not found");
    }
}

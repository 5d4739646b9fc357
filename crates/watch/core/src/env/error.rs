//! Oracle access errors.

use crate::error::{ErrorSeverity, WatchError};

use super::RegionId;

/// Errors raised by the world query layer.
///
/// A failed query aborts the refresh that issued it; the monitor keeps its
/// previous cached state until the next scheduled refresh.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    /// The region disappeared between enumeration and inspection.
    #[error("{0} not found")]
    RegionNotFound(RegionId),

    /// The world model cannot be queried right now (e.g. no save loaded).
    #[error("world model unavailable: {0}")]
    Unavailable(&'static str),
}

impl WatchError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            OracleError::RegionNotFound(_) => "ORACLE_REGION_NOT_FOUND",
            OracleError::Unavailable(_) => "ORACLE_UNAVAILABLE",
        }
    }
}

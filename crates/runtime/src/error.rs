//! Runtime errors.

use watch_core::{ErrorSeverity, WatchError};

use crate::events::Signal;
use crate::host::MonitorId;

/// Failures reported by a [`crate::HostEvents`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("host rejected subscription to {signal}")]
    SubscriptionRejected { signal: Signal },
}

impl WatchError for HostError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            HostError::SubscriptionRejected { .. } => "HOST_SUBSCRIPTION_REJECTED",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Host(#[from] HostError),

    #[error("{0} is not registered")]
    UnknownMonitor(MonitorId),
}

impl WatchError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Host(e) => e.severity(),
            RuntimeError::UnknownMonitor(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::Host(e) => e.error_code(),
            RuntimeError::UnknownMonitor(_) => "RUNTIME_UNKNOWN_MONITOR",
        }
    }
}

pub type Result<T> = std::result::Result<T, RuntimeError>;

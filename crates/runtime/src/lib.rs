//! Host-side orchestration for the readiness monitors.
//!
//! This crate wires `watch-core` monitors to a host: it owns the monitors and
//! their shared slot allocator, tracks which of them are attached to which host
//! signal, and supplies in-memory oracles built from loaded content.
//!
//! Modules are organized by responsibility:
//! - [`host`] owns monitors and dispatches signals
//! - [`events`] defines the signals and the subscription seam
//! - [`oracle`] provides oracle implementations over loaded content
//! - [`config`] reads host settings from the environment
pub mod config;
pub mod error;
pub mod events;
pub mod host;
pub mod oracle;

pub use config::RuntimeConfig;
pub use error::{HostError, Result, RuntimeError};
pub use events::{EventHub, HostEvents, Signal, SubscriptionId};
pub use host::{FrameReport, MonitorHost, MonitorId};
pub use oracle::{NameOracleImpl, OracleManager, WorldOracleImpl};

//! Error types for monitor registration.

use thiserror::Error;

use crate::monitor::MonitorToken;

/// Errors that can occur when registering a location monitor.
///
/// Both variants are recoverable results, never panics. Deregistration is
/// total and has no error type.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RegisterError {
    /// Location sensing is disabled system-wide.
    ///
    /// The caller may retry later or degrade gracefully; this library
    /// performs no retries of its own.
    #[error("location monitoring is unavailable on this system")]
    MonitoringUnavailable,

    /// A monitor with the same token is already registered.
    ///
    /// Programmer error: the same identity was registered twice without an
    /// intervening deregistration.
    #[error("monitor {token} is already registered")]
    AlreadyRegistered {
        /// The token that collided.
        token: MonitorToken,
    },
}

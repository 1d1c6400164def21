//! Platform authorization state for location access.
//!
//! Authorization is granted (or denied) by the platform, outside this
//! library. The coordinator only reads the state and reacts to change
//! events; denial is a legitimate terminal state, not an error, and no
//! automatic re-prompt ever happens here.

use std::fmt;

/// Platform-granted authorization level for location access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthorizationStatus {
    /// The user has not yet been asked.
    #[default]
    NotDetermined,
    /// The user declined location access.
    Denied,
    /// Location access granted while the app is in the foreground.
    WhenInUse,
    /// Location access granted at all times.
    Always,
}

impl AuthorizationStatus {
    /// Returns true if this status allows the device to deliver updates.
    ///
    /// Both foreground-only and always-on grants allow updates; the
    /// distinction only matters to the platform's background scheduling.
    pub fn grants_updates(&self) -> bool {
        matches!(self, Self::WhenInUse | Self::Always)
    }

    /// Returns true if the user declined access.
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Denied)
    }
}

impl fmt::Display for AuthorizationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotDetermined => write!(f, "NotDetermined"),
            Self::Denied => write!(f, "Denied"),
            Self::WhenInUse => write!(f, "WhenInUse"),
            Self::Always => write!(f, "Always"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grants_updates() {
        assert!(AuthorizationStatus::WhenInUse.grants_updates());
        assert!(AuthorizationStatus::Always.grants_updates());

        assert!(!AuthorizationStatus::NotDetermined.grants_updates());
        assert!(!AuthorizationStatus::Denied.grants_updates());
    }

    #[test]
    fn test_is_denied() {
        assert!(AuthorizationStatus::Denied.is_denied());
        assert!(!AuthorizationStatus::NotDetermined.is_denied());
        assert!(!AuthorizationStatus::Always.is_denied());
    }

    #[test]
    fn test_default_is_not_determined() {
        assert_eq!(
            AuthorizationStatus::default(),
            AuthorizationStatus::NotDetermined
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(AuthorizationStatus::WhenInUse.to_string(), "WhenInUse");
        assert_eq!(AuthorizationStatus::Denied.to_string(), "Denied");
    }
}

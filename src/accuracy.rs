//! Accuracy requirements for location monitoring.
//!
//! Each monitor declares the precision it needs as an [`Accuracy`] value in
//! meters (lower is stricter). The coordinator reconciles all declared
//! requirements into the single strictest value and applies that to the
//! device.

use std::fmt;

/// Desired location accuracy in meters (lower is stricter).
///
/// # Design
///
/// Using a numeric value rather than an enum keeps reconciliation a plain
/// numeric minimum and lets callers declare intermediate precision levels
/// without touching this type. The named constants cover the common tiers.
///
/// # Ordering
///
/// Lower values indicate stricter requirements:
/// `BEST` (0m) < `TEN_METERS` < `HUNDRED_METERS` < `KILOMETER` < `THREE_KILOMETERS`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Accuracy(pub f64);

impl Accuracy {
    /// Best precision the device can deliver (0m sentinel).
    pub const BEST: Self = Self(0.0);

    /// Within ten meters - navigation-grade positioning.
    pub const TEN_METERS: Self = Self(10.0);

    /// Within a hundred meters.
    pub const HUNDRED_METERS: Self = Self(100.0);

    /// Within a kilometer.
    pub const KILOMETER: Self = Self(1_000.0);

    /// Within three kilometers - coarsest supported tier.
    ///
    /// This is the fallback applied when no monitors are registered.
    pub const THREE_KILOMETERS: Self = Self(3_000.0);

    /// Get the accuracy value in meters.
    #[inline]
    pub fn meters(&self) -> f64 {
        self.0
    }

    /// Returns true if this requirement is stricter (lower meters) than other.
    #[inline]
    pub fn is_stricter_than(&self, other: &Self) -> bool {
        self.0 < other.0
    }

    /// Return the stricter of two requirements.
    #[inline]
    pub fn stricter(self, other: Self) -> Self {
        if other.is_stricter_than(&self) {
            other
        } else {
            self
        }
    }
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}m", self.0)
    }
}

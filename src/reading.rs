//! Location reading snapshot type.
//!
//! A [`LocationReading`] is one fix produced by the underlying device and
//! fanned out unmodified to every registered monitor. The coordinator never
//! interprets readings - no movement or speed computation happens here.

use chrono::{DateTime, Utc};

/// A single location fix from the sensing device.
///
/// # Unknown fields
///
/// Devices do not always produce the full vector set. Altitude defaults to
/// `0.0` when unknown; `speed` and `course` use negative sentinels, matching
/// common platform conventions, with `has_speed()` / `has_course()` as the
/// supported way to check.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationReading {
    /// Latitude in degrees (-90 to 90).
    pub latitude: f64,

    /// Longitude in degrees (-180 to 180).
    pub longitude: f64,

    /// Altitude MSL in meters. `0.0` when unknown.
    pub altitude: f64,

    /// Estimated horizontal accuracy of this fix in meters.
    pub horizontal_accuracy: f64,

    /// Ground speed in meters per second. Negative when unknown.
    pub speed: f64,

    /// Course over ground in degrees (0-360). Negative when unknown.
    pub course: f64,

    /// When the device measured this fix.
    pub timestamp: DateTime<Utc>,
}

impl LocationReading {
    /// Create a reading with position only; all vector fields unknown.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude: 0.0,
            horizontal_accuracy: 0.0,
            speed: -1.0,
            course: -1.0,
            timestamp: Utc::now(),
        }
    }

    /// Set the altitude in meters MSL.
    pub fn with_altitude(mut self, altitude: f64) -> Self {
        self.altitude = altitude;
        self
    }

    /// Set the estimated horizontal accuracy in meters.
    pub fn with_horizontal_accuracy(mut self, accuracy: f64) -> Self {
        self.horizontal_accuracy = accuracy;
        self
    }

    /// Set the ground speed in meters per second.
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Set the course over ground in degrees.
    pub fn with_course(mut self, course: f64) -> Self {
        self.course = course;
        self
    }

    /// Set the measurement timestamp.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Check if a speed value is present.
    pub fn has_speed(&self) -> bool {
        self.speed >= 0.0
    }

    /// Check if a course value is present.
    pub fn has_course(&self) -> bool {
        self.course >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_reading_has_unknown_vectors() {
        let reading = LocationReading::new(53.5, 10.0);

        assert_eq!(reading.latitude, 53.5);
        assert_eq!(reading.longitude, 10.0);
        assert_eq!(reading.altitude, 0.0);
        assert!(!reading.has_speed());
        assert!(!reading.has_course());
    }

    #[test]
    fn test_with_enrichers() {
        let reading = LocationReading::new(43.6, 1.4)
            .with_altitude(152.0)
            .with_horizontal_accuracy(5.0)
            .with_speed(12.5)
            .with_course(270.0);

        assert_eq!(reading.altitude, 152.0);
        assert_eq!(reading.horizontal_accuracy, 5.0);
        assert!(reading.has_speed());
        assert_eq!(reading.speed, 12.5);
        assert!(reading.has_course());
        assert_eq!(reading.course, 270.0);
    }

    #[test]
    fn test_with_timestamp() {
        let fixed = Utc::now() - chrono::Duration::seconds(30);
        let reading = LocationReading::new(0.0, 0.0).with_timestamp(fixed);
        assert_eq!(reading.timestamp, fixed);
    }
}

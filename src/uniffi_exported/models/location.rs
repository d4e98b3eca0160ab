use crate::prelude::*;

/// A single location fix as reported by the platform location manager.
#[derive(Record, Clone, Debug, PartialEq)]
pub struct Location {
    pub coordinate: Coordinate,
    /// Meters above sea level.
    pub altitude: f64,
    /// Radius of uncertainty in meters, negative if the coordinate is invalid.
    pub horizontal_accuracy: f64,
    pub vertical_accuracy: f64,
    /// Milliseconds since the Unix epoch.
    pub timestamp_ms: i64,
}

impl Location {
    pub fn new(coordinate: Coordinate, timestamp_ms: i64) -> Self {
        Self {
            coordinate,
            altitude: 0.0,
            horizontal_accuracy: 0.0,
            vertical_accuracy: -1.0,
            timestamp_ms,
        }
    }
}

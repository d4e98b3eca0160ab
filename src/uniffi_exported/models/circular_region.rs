use crate::prelude::*;

/// Region used to prioritise forward geocoding results.
#[derive(Record, Clone, Debug, PartialEq)]
pub struct CircularRegion {
    pub identifier: String,
    pub center: Coordinate,
    /// Meters.
    pub radius: f64,
}

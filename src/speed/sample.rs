use serde::Serialize;

use super::haversine::haversine_distance_m;

/// One GPS fix as seen by the tracker. Coordinates are not range checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Sample {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    /// Seconds, any epoch as long as it is consistent within a stream.
    pub timestamp: f64,
}

impl Sample {
    pub fn new(latitude_deg: f64, longitude_deg: f64, timestamp: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            timestamp,
        }
    }

    pub fn distance_to(&self, other: &Sample) -> f64 {
        haversine_distance_m(
            self.latitude_deg,
            self.longitude_deg,
            other.latitude_deg,
            other.longitude_deg,
        )
    }

    pub fn elapsed_since(&self, earlier: &Sample) -> f64 {
        self.timestamp - earlier.timestamp
    }
}

mod error;
mod haversine;
mod sample;
mod tracker;
mod units;

pub use error::SpeedError;
pub use haversine::{haversine_distance_m, EARTH_RADIUS_M};
pub use sample::Sample;
pub use tracker::{SpeedTracker, TrackerState, NO_SPEED};
pub use units::ms_to_kmh;

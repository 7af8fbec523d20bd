pub mod config;
pub mod ffi;
pub mod replay;
pub mod speed;

pub use speed::{haversine_distance_m, ms_to_kmh, Sample, SpeedError, SpeedTracker, NO_SPEED};

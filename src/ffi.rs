//! C ABI exports: `reset`, `add_sample` and `ms_to_kmh`.
//!
//! Each calling thread gets its own tracker, so a host feeding several
//! streams must use one thread per stream or link against the Rust API.

use std::cell::RefCell;

use crate::speed::{self, SpeedTracker};

thread_local! {
    static TRACKER: RefCell<SpeedTracker> = RefCell::new(SpeedTracker::new());
}

#[no_mangle]
pub extern "C" fn reset() {
    TRACKER.with(|t| t.borrow_mut().reset());
}

/// Speed in m/s since the previous fix, or `-1.0` when there is none.
#[no_mangle]
pub extern "C" fn add_sample(lat: f64, lon: f64, timestamp: f64) -> f64 {
    TRACKER.with(|t| t.borrow_mut().add_sample(lat, lon, timestamp))
}

#[no_mangle]
pub extern "C" fn ms_to_kmh(speed_m_s: f64) -> f64 {
    speed::ms_to_kmh(speed_m_s)
}

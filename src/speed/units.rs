/// Converts m/s to km/h.
///
/// Check for the no-speed sentinel before converting: `-1.0` becomes `-3.6`.
pub fn ms_to_kmh(speed_m_s: f64) -> f64 {
    speed_m_s * 3.6
}

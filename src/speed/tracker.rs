use super::error::SpeedError;
use super::sample::Sample;

/// Returned by [`SpeedTracker::add_sample`] when no speed is available.
pub const NO_SPEED: f64 = -1.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrackerState {
    pub has_previous: bool,
    /// Only meaningful while `has_previous` is set.
    pub previous: Sample,
}

/// Instantaneous speed from consecutive GPS fixes.
///
/// Holds the last accepted fix. One tracker per stream: interleaving two
/// streams through the same instance mixes up the previous point.
#[derive(Debug, Default)]
pub struct SpeedTracker {
    state: TrackerState,
}

impl SpeedTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.state = TrackerState::default();
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn is_primed(&self) -> bool {
        self.state.has_previous
    }

    pub fn previous(&self) -> Option<Sample> {
        self.state.has_previous.then_some(self.state.previous)
    }

    /// Feeds a fix and returns the speed in m/s since the previous one.
    ///
    /// The first fix only primes the tracker. A fix whose timestamp is not
    /// after the stored one is dropped and the stored fix stays the baseline.
    pub fn update(&mut self, sample: Sample) -> Result<f64, SpeedError> {
        let Some(previous) = self.previous() else {
            self.state = TrackerState {
                has_previous: true,
                previous: sample,
            };
            return Err(SpeedError::NoPrevious);
        };

        let dt = sample.elapsed_since(&previous);
        if dt <= 0.0 {
            log::trace!("dropping sample at t={}: dt={}", sample.timestamp, dt);
            return Err(SpeedError::NonPositiveElapsed { dt });
        }

        let speed = previous.distance_to(&sample) / dt;
        self.state.previous = sample;
        Ok(speed)
    }

    /// Sentinel flavour of [`update`](Self::update): `-1.0` stands for "no speed".
    pub fn add_sample(&mut self, lat: f64, lon: f64, timestamp: f64) -> f64 {
        self.update(Sample::new(lat, lon, timestamp)).unwrap_or(NO_SPEED)
    }
}

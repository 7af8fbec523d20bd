use serde::Serialize;

use super::types::Track;
use crate::speed::{Sample, SpeedError, SpeedTracker};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    FirstFix,
    NonPositiveElapsed,
}

impl From<SpeedError> for SkipReason {
    fn from(err: SpeedError) -> Self {
        match err {
            SpeedError::NoPrevious => SkipReason::FirstFix,
            SpeedError::NonPositiveElapsed { .. } => SkipReason::NonPositiveElapsed,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Reading {
    pub index: usize,
    pub sample: Sample,
    pub speed_m_s: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<SkipReason>,
}

/// Feeds every fix of `track` through a fresh tracker.
pub fn replay(track: &Track) -> Vec<Reading> {
    let mut tracker = SpeedTracker::new();
    track
        .samples
        .iter()
        .enumerate()
        .map(|(index, sample)| {
            let (speed_m_s, skipped) = match tracker.update(*sample) {
                Ok(speed) => {
                    log::debug!("fix {}: {:.3} m/s", index, speed);
                    (Some(speed), None)
                }
                Err(e) => {
                    if let SpeedError::NonPositiveElapsed { .. } = e {
                        log::warn!("Dropping fix {}: {}", index, e);
                    }
                    (None, Some(SkipReason::from(e)))
                }
            };
            Reading {
                index,
                sample: *sample,
                speed_m_s,
                skipped,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub fixes: usize,
    pub speeds: usize,
    pub max_m_s: Option<f64>,
    pub mean_m_s: Option<f64>,
}

impl Summary {
    pub fn from_readings(readings: &[Reading]) -> Self {
        let speeds: Vec<f64> = readings.iter().filter_map(|r| r.speed_m_s).collect();
        let max_m_s = speeds.iter().copied().reduce(f64::max);
        let mean_m_s = if speeds.is_empty() {
            None
        } else {
            Some(speeds.iter().sum::<f64>() / speeds.len() as f64)
        };

        Summary {
            fixes: readings.len(),
            speeds: speeds.len(),
            max_m_s,
            mean_m_s,
        }
    }
}

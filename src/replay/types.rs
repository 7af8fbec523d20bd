use serde::Deserialize;

use super::error::TrackError;
use super::parsing::parse_timestamp;
use crate::speed::Sample;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Seconds(f64),
    Text(String),
}

/// A recorded fix as it appears in a track file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Fix {
    pub lat: f64,
    pub lon: f64,
    pub timestamp: Timestamp,
}

impl Fix {
    pub fn to_sample(&self) -> Result<Sample, String> {
        let seconds = parse_timestamp(&self.timestamp)?;
        Ok(Sample::new(self.lat, self.lon, seconds))
    }
}

#[derive(Debug, Deserialize)]
struct TrackFile {
    name: Option<String>,
    fixes: Vec<Fix>,
}

#[derive(Debug, Clone)]
pub struct Track {
    pub name: Option<String>,
    /// File order, timestamps resolved to seconds.
    pub samples: Vec<Sample>,
}

impl Track {
    pub fn from_str(yaml: &str) -> Result<Self, TrackError> {
        let file: TrackFile = serde_yaml::from_str(yaml)?;
        if file.fixes.is_empty() {
            return Err(TrackError::Empty);
        }

        let samples = file
            .fixes
            .iter()
            .enumerate()
            .map(|(i, fix)| fix.to_sample().map_err(|e| TrackError::Fix(i, e)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Track {
            name: file.name,
            samples,
        })
    }

    pub fn from_file(path: &str) -> Result<Self, TrackError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

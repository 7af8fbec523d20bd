use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::speed::ms_to_kmh;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub unit: SpeedUnit,
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SpeedUnit {
    #[default]
    Ms,
    Kmh,
}

impl SpeedUnit {
    pub fn convert(self, speed_m_s: f64) -> f64 {
        match self {
            SpeedUnit::Ms => speed_m_s,
            SpeedUnit::Kmh => ms_to_kmh(speed_m_s),
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            SpeedUnit::Ms => "m/s",
            SpeedUnit::Kmh => "km/h",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Config {
    pub fn from_str(yaml: &str) -> Result<Self, ConfigError> {
        // an empty file is a valid, all-default config
        if yaml.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Command line values win over the file.
    pub fn with_overrides(mut self, unit: Option<SpeedUnit>, format: Option<OutputFormat>) -> Self {
        if let Some(unit) = unit {
            self.output.unit = unit;
        }
        if let Some(format) = format {
            self.output.format = format;
        }
        self
    }
}

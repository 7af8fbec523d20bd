mod error;
mod output;
mod parsing;
mod runner;
mod types;

pub use error::{OutputError, TrackError};
pub use output::{format_speed, json_line, summary_line, text_line, write_readings};
pub use runner::{replay, Reading, SkipReason, Summary};
pub use types::{Fix, Timestamp, Track};

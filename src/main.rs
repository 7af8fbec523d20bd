use clap::{Parser, Subcommand};
use std::io::Write;
use std::process::ExitCode;
use thiserror::Error;

use gps_speed::config::{Config, ConfigError, OutputFormat, SpeedUnit};
use gps_speed::replay::{replay, write_readings, OutputError, Track, TrackError};

#[derive(Parser)]
#[command(name = "gps-speed")]
#[command(about = "Speed from recorded GPS fixes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that a track file parses
    Validate { track: String },
    /// Print the speed at every fix of a track file
    Replay {
        track: String,
        /// YAML config file
        #[arg(long)]
        config: Option<String>,
        #[arg(long, value_enum)]
        unit: Option<SpeedUnit>,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error("Error reading config: {0}")]
    Config(#[from] ConfigError),
    #[error("Error loading track: {0}")]
    Track(#[from] TrackError),
    #[error("Error writing output: {0}")]
    Output(#[from] OutputError),
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { track } => validate(&track),
        Commands::Replay {
            track,
            config,
            unit,
            format,
        } => run_replay(
            &mut std::io::stdout().lock(),
            &track,
            config.as_deref(),
            unit,
            format,
        ),
    };
    exit_code(result)
}

fn exit_code(result: Result<(), CliError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Output(e)) if e.is_broken_pipe() => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn validate(path: &str) -> Result<(), CliError> {
    let track = Track::from_file(path)?;
    writeln!(
        std::io::stdout().lock(),
        "Track {}is valid ({} fixes)",
        track
            .name
            .as_deref()
            .map(|n| format!("'{}' ", n))
            .unwrap_or_default(),
        track.len()
    )
    .map_err(OutputError::from)?;
    Ok(())
}

fn run_replay<W: Write>(
    out: &mut W,
    path: &str,
    config_path: Option<&str>,
    unit: Option<SpeedUnit>,
    format: Option<OutputFormat>,
) -> Result<(), CliError> {
    let config = match config_path {
        Some(p) => Config::from_file(p)?,
        None => Config::default(),
    };
    let config = config.with_overrides(unit, format);

    let track = Track::from_file(path)?;
    log::info!("Replaying {} fixes from {}", track.len(), path);
    let readings = replay(&track);

    write_readings(out, &readings, config.output.unit, config.output.format)?;
    Ok(())
}

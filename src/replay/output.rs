use std::io::Write;

use serde::Serialize;

use super::error::OutputError;
use super::runner::{Reading, SkipReason, Summary};
use crate::config::{OutputFormat, SpeedUnit};

/// `-` when there is no speed. The sentinel never reaches the unit conversion.
pub fn format_speed(speed_m_s: Option<f64>, unit: SpeedUnit) -> String {
    match speed_m_s {
        Some(s) => format!("{:.2} {}", unit.convert(s), unit.suffix()),
        None => "-".to_string(),
    }
}

pub fn text_line(reading: &Reading, unit: SpeedUnit) -> String {
    let note = match reading.skipped {
        Some(SkipReason::FirstFix) => "  (first fix)",
        Some(SkipReason::NonPositiveElapsed) => "  (dropped: time did not advance)",
        None => "",
    };
    format!(
        "{:>5}  t={:<14} {:>10.6} {:>11.6}  {}{}",
        reading.index,
        reading.sample.timestamp,
        reading.sample.latitude_deg,
        reading.sample.longitude_deg,
        format_speed(reading.speed_m_s, unit),
        note
    )
}

pub fn summary_line(summary: &Summary, unit: SpeedUnit) -> String {
    format!(
        "{} fixes, {} speeds, max {}, mean {}",
        summary.fixes,
        summary.speeds,
        format_speed(summary.max_m_s, unit),
        format_speed(summary.mean_m_s, unit),
    )
}

#[derive(Serialize)]
struct JsonReading<'a> {
    #[serde(flatten)]
    reading: &'a Reading,
    speed: Option<f64>,
    unit: SpeedUnit,
}

pub fn json_line(reading: &Reading, unit: SpeedUnit) -> Result<String, OutputError> {
    let line = JsonReading {
        reading,
        speed: reading.speed_m_s.map(|s| unit.convert(s)),
        unit,
    };
    Ok(serde_json::to_string(&line)?)
}

/// Writes one line per reading. Text output ends with a summary line.
pub fn write_readings<W: Write>(
    out: &mut W,
    readings: &[Reading],
    unit: SpeedUnit,
    format: OutputFormat,
) -> Result<(), OutputError> {
    match format {
        OutputFormat::Text => {
            for reading in readings {
                writeln!(out, "{}", text_line(reading, unit))?;
            }
            let summary = Summary::from_readings(readings);
            writeln!(out, "{}", summary_line(&summary, unit))?;
        }
        OutputFormat::Json => {
            for reading in readings {
                writeln!(out, "{}", json_line(reading, unit)?)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::replay::{replay, Track};

    const TRACK: &str = r#"
fixes:
  - { lat: 0, lon: 0, timestamp: 0 }
  - { lat: 0, lon: 0, timestamp: 10 }
  - { lat: 0, lon: 1, timestamp: 10 }
  - { lat: 0, lon: 1, timestamp: 20 }
"#;

    fn readings() -> Vec<Reading> {
        replay(&Track::from_str(TRACK).unwrap())
    }

    #[test]
    fn speed_text() {
        assert_eq!(format_speed(None, SpeedUnit::Kmh), "-");
        assert_eq!(format_speed(None, SpeedUnit::Ms), "-");
        assert_eq!(format_speed(Some(10.0), SpeedUnit::Kmh), "36.00 km/h");
        assert_eq!(format_speed(Some(10.0), SpeedUnit::Ms), "10.00 m/s");
    }

    #[test]
    fn notes() {
        let readings = readings();
        let first = text_line(&readings[0], SpeedUnit::Ms);
        assert!(first.ends_with("-  (first fix)"), "{}", first);

        let moving = text_line(&readings[1], SpeedUnit::Ms);
        assert!(moving.ends_with("0.00 m/s"), "{}", moving);

        let dropped = text_line(&readings[2], SpeedUnit::Ms);
        assert!(
            dropped.ends_with("-  (dropped: time did not advance)"),
            "{}",
            dropped
        );
    }

    #[test]
    fn text_output_ends_with_summary() {
        let mut out = Vec::new();
        write_readings(&mut out, &readings(), SpeedUnit::Kmh, OutputFormat::Text).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[4].starts_with("4 fixes, 2 speeds, max "), "{}", lines[4]);
        assert!(lines[4].ends_with(" km/h"), "{}", lines[4]);
    }

    #[test]
    fn json_output_honours_unit() {
        let mut out = Vec::new();
        write_readings(&mut out, &readings(), SpeedUnit::Kmh, OutputFormat::Json).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 4);

        assert_eq!(lines[0]["speed"], serde_json::Value::Null);
        assert_eq!(lines[0]["speed_m_s"], serde_json::Value::Null);
        assert_eq!(lines[0]["skipped"], "first_fix");
        assert_eq!(lines[0]["unit"], "kmh");

        let m_s = lines[3]["speed_m_s"].as_f64().unwrap();
        let kmh = lines[3]["speed"].as_f64().unwrap();
        assert_relative_eq!(kmh, m_s * 3.6);
        assert_relative_eq!(m_s, 11_119.5, max_relative = 0.01);
    }

    #[test]
    fn json_in_ms_matches_raw_speed() {
        let line = json_line(&readings()[1], SpeedUnit::Ms).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["speed"], 0.0);
        assert_eq!(value["unit"], "ms");
        assert!(value.get("skipped").is_none());
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn closed_reader_is_an_error_not_a_panic() {
        let err = write_readings(&mut ClosedPipe, &readings(), SpeedUnit::Ms, OutputFormat::Text)
            .unwrap_err();
        assert!(err.is_broken_pipe());
    }
}

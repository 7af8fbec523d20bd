use chrono::DateTime;

use super::types::Timestamp;

/// Resolves a recorded timestamp to seconds. RFC 3339 strings become
/// fractional seconds since the Unix epoch.
pub fn parse_timestamp(timestamp: &Timestamp) -> Result<f64, String> {
    let seconds = match timestamp {
        Timestamp::Seconds(s) => *s,
        Timestamp::Text(s) => {
            let s = s.trim();
            match s.parse::<f64>() {
                Ok(v) => v,
                Err(_) => {
                    let dt = DateTime::parse_from_rfc3339(s).map_err(|e| e.to_string())?;
                    dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_nanos()) / 1e9
                }
            }
        }
    };

    if seconds.is_finite() {
        Ok(seconds)
    } else {
        Err(format!("timestamp is not finite: {}", seconds))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn numeric_seconds() {
        assert_eq!(parse_timestamp(&Timestamp::Seconds(12.5)), Ok(12.5));
        assert_eq!(parse_timestamp(&Timestamp::Text(" 7 ".into())), Ok(7.0));
    }

    #[test]
    fn rfc3339() {
        let t = parse_timestamp(&Timestamp::Text("2024-05-01T12:00:00.250Z".into())).unwrap();
        assert_relative_eq!(t, 1_714_564_800.25, epsilon = 1e-6);

        let offset = parse_timestamp(&Timestamp::Text("2024-05-01T14:00:00+02:00".into())).unwrap();
        assert_relative_eq!(offset, 1_714_564_800.0, epsilon = 1e-6);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp(&Timestamp::Text("yesterday".into())).is_err());
        assert!(parse_timestamp(&Timestamp::Seconds(f64::NAN)).is_err());
    }
}

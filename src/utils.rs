/// Formatting helpers for the log sink
use time::{format_description, OffsetDateTime};

use crate::models::{ProximityState, TelemetryRecord};

/// Format a timestamp for human-readable logging
///
/// Converts an OffsetDateTime to DD.MM.YYYY - HH:MM:SS format
/// Falls back to default string representation if formatting fails.
pub fn format_datetime(dt: &OffsetDateTime) -> String {
    let format = format_description::parse("[day].[month].[year] - [hour]:[minute]:[second]")
        .expect("Failed to create format description");
    dt.format(&format).unwrap_or_else(|_| dt.to_string())
}

/// Render one record as the serial-style log line:
/// `T = <temp> °C | D = <dist> cm` plus hazard markers.
///
/// A timed-out sample prints its NaN distance as-is; the line is for
/// humans and nothing parses it.
pub fn format_record(record: &TelemetryRecord) -> String {
    let mut line = format!(
        "T = {:.1} °C | D = {:.1} cm",
        record.sample.temperature_c, record.sample.distance_cm
    );

    if record.state == ProximityState::Collision {
        line.push_str("  **COLLISION**");
    }
    if record.state == ProximityState::Approaching {
        line.push_str("  **INBOUND**");
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sample;

    fn record(distance_cm: f32, state: ProximityState) -> TelemetryRecord {
        TelemetryRecord {
            device: "sonar-node",
            millis: 1234,
            sample: Sample {
                temperature_c: 21.44,
                round_trip_micros: Some(600),
                distance_cm,
            },
            state,
        }
    }

    #[test]
    fn nominal_record_has_no_markers() {
        let line = format_record(&record(50.0, ProximityState::Nominal));
        assert_eq!(line, "T = 21.4 °C | D = 50.0 cm");
    }

    #[test]
    fn approaching_record_carries_inbound_marker() {
        let line = format_record(&record(10.3, ProximityState::Approaching));
        assert_eq!(line, "T = 21.4 °C | D = 10.3 cm  **INBOUND**");
    }

    #[test]
    fn collision_record_carries_collision_marker() {
        let line = format_record(&record(2.6, ProximityState::Collision));
        assert_eq!(line, "T = 21.4 °C | D = 2.6 cm  **COLLISION**");
    }

    #[test]
    fn timed_out_record_prints_nan_distance() {
        let line = format_record(&record(f32::NAN, ProximityState::Unknown));
        assert!(line.starts_with("T = 21.4 °C | D = NaN cm"));
    }
}

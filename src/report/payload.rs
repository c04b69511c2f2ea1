/// Wire payload for the telemetry endpoint
use serde::Serialize;

use crate::models::TelemetryRecord;

/// JSON body POSTed once per cycle.
///
/// `dist_cm` is null for a timed-out measurement; JSON has no NaN, so the
/// absence of a usable distance is carried explicitly.
#[derive(Debug, Serialize)]
pub struct TelemetryPayload {
    pub device: &'static str,
    pub millis: u64,
    pub celsius: f32,
    pub dist_cm: Option<f32>,
}

impl TelemetryPayload {
    pub fn from_record(record: &TelemetryRecord) -> Self {
        TelemetryPayload {
            device: record.device,
            millis: record.millis,
            celsius: record.sample.temperature_c,
            dist_cm: if record.sample.out_of_range() {
                None
            } else {
                Some(record.sample.distance_cm)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProximityState, Sample};

    fn record(sample: Sample) -> TelemetryRecord {
        TelemetryRecord {
            device: "sonar-node",
            millis: 4200,
            sample,
            state: ProximityState::Nominal,
        }
    }

    #[test]
    fn finite_distance_serializes_as_number() {
        let payload = TelemetryPayload::from_record(&record(Sample::from_round_trip(600, 20.0)));
        let json: serde_json::Value = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["device"], "sonar-node");
        assert_eq!(json["millis"], 4200);
        assert!((json["celsius"].as_f64().unwrap() - 20.0).abs() < 1e-6);
        assert!(json["dist_cm"].is_number());
    }

    #[test]
    fn timed_out_distance_serializes_as_null() {
        let payload = TelemetryPayload::from_record(&record(Sample::timeout(20.0)));
        let json: serde_json::Value = serde_json::to_value(&payload).unwrap();
        assert!(json["dist_cm"].is_null());
    }
}

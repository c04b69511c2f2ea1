/// Proximity classification from a primary sample plus one confirmatory re-sample
use crate::models::{ProximityState, Sample};

/// Below this distance the raw duration already saturates; a reading here
/// needs the confirmatory re-sample to tell contact from noise.
pub const CONTACT_THRESHOLD_CM: f32 = 3.0;

/// Upper edge of the inbound band: close enough to warrant trend-checking,
/// not yet at contact threshold.
pub const INBOUND_THRESHOLD_CM: f32 = 15.0;

/// A re-sample at or past this distance is an overflow reading. Paired with
/// a saturated primary it means the object sits against the transducer,
/// beyond minimum resolvable range.
pub const OVERFLOW_THRESHOLD_CM: f32 = 1000.0;

/// True when the primary reading falls in either decision band and a
/// confirmatory re-sample would change the outcome. Lets the caller skip
/// a wasted second trigger when the object is simply out of range or far.
pub fn needs_confirmation(primary: &Sample) -> bool {
    !primary.out_of_range() && primary.distance_cm <= INBOUND_THRESHOLD_CM
}

/// Classify one cycle's reading.
///
/// `confirmatory` is a second immediate measurement taken under the same
/// temperature assumption, used purely to disambiguate edge cases; it is
/// not a smoothing input. A single echo is noisy near the minimum range
/// and near the timeout boundary, so one extra reading is taken before
/// committing to a hazard classification.
///
/// Decision policy, first match wins:
/// 1. primary out of range -> Unknown
/// 2. primary at or below contact threshold -> Collision when the
///    re-sample overflows, Unknown otherwise
/// 3. primary inside inbound band -> Approaching when the re-sample is
///    closer than the primary, Nominal otherwise
/// 4. anything else -> Nominal
pub fn classify(primary: &Sample, confirmatory: &Sample) -> ProximityState {
    if primary.out_of_range() {
        return ProximityState::Unknown;
    }

    if primary.distance_cm <= CONTACT_THRESHOLD_CM {
        if confirmatory.distance_cm >= OVERFLOW_THRESHOLD_CM {
            return ProximityState::Collision;
        }
        // Saturated primary without an overflow re-sample is not enough
        // evidence for a hazard call.
        return ProximityState::Unknown;
    }

    if primary.distance_cm <= INBOUND_THRESHOLD_CM {
        if confirmatory.distance_cm < primary.distance_cm {
            return ProximityState::Approaching;
        }
        return ProximityState::Nominal;
    }

    ProximityState::Nominal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(distance_cm: f32) -> Sample {
        Sample {
            temperature_c: 20.0,
            round_trip_micros: if distance_cm.is_nan() { None } else { Some(1) },
            distance_cm,
        }
    }

    #[test]
    fn out_of_range_primary_is_unknown() {
        let state = classify(&sample(f32::NAN), &sample(500.0));
        assert_eq!(state, ProximityState::Unknown);
    }

    #[test]
    fn saturated_primary_with_overflow_resample_is_collision() {
        let state = classify(&sample(2.0), &sample(1500.0));
        assert_eq!(state, ProximityState::Collision);
    }

    #[test]
    fn saturated_primary_without_overflow_resample_stays_unknown() {
        let state = classify(&sample(2.0), &sample(500.0));
        assert_eq!(state, ProximityState::Unknown);
    }

    #[test]
    fn inbound_band_with_closing_resample_is_approaching() {
        let state = classify(&sample(10.0), &sample(8.0));
        assert_eq!(state, ProximityState::Approaching);
    }

    #[test]
    fn inbound_band_with_receding_resample_is_nominal() {
        let state = classify(&sample(10.0), &sample(12.0));
        assert_eq!(state, ProximityState::Nominal);
    }

    #[test]
    fn far_primary_is_nominal_regardless_of_resample() {
        for confirmatory in [f32::NAN, 0.0, 10.0, 2000.0] {
            let state = classify(&sample(50.0), &sample(confirmatory));
            assert_eq!(state, ProximityState::Nominal);
        }
    }

    #[test]
    fn classification_is_idempotent() {
        let primary = sample(10.0);
        let confirmatory = sample(8.0);
        let first = classify(&primary, &confirmatory);
        let second = classify(&primary, &confirmatory);
        assert_eq!(first, second);
    }

    #[test]
    fn confirmation_needed_only_inside_decision_bands() {
        assert!(needs_confirmation(&sample(2.0)));
        assert!(needs_confirmation(&sample(10.0)));
        assert!(needs_confirmation(&sample(15.0)));
        assert!(!needs_confirmation(&sample(15.1)));
        assert!(!needs_confirmation(&sample(50.0)));
        assert!(!needs_confirmation(&sample(f32::NAN)));
    }
}

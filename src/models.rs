/// Core data types shared across the measurement pipeline
// Linear approximation of the temperature dependence of sound speed in air
const SOUND_SPEED_BASE_M_S: f32 = 331.3;
const SOUND_SPEED_PER_DEG_C: f32 = 0.606;

/// Speed of sound in air at the given ambient temperature, metres/second.
pub fn sound_speed_m_s(temperature_c: f32) -> f32 {
    SOUND_SPEED_BASE_M_S + SOUND_SPEED_PER_DEG_C * temperature_c
}

/// One echo measurement result.
///
/// A missing echo (no reflecting object within range) is a normal outcome,
/// not an error: it is carried as `round_trip_micros = None` and a NaN
/// distance, and flows through the pipeline like any other sample.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub temperature_c: f32,
    pub round_trip_micros: Option<u64>,
    pub distance_cm: f32,
}

impl Sample {
    /// Sample for an echo that never arrived within the timeout bound.
    pub fn timeout(temperature_c: f32) -> Self {
        Sample {
            temperature_c,
            round_trip_micros: None,
            distance_cm: f32::NAN,
        }
    }

    /// Derive a distance from a raw round-trip time using the
    /// temperature-corrected speed of sound.
    ///
    /// Round-trip time is halved (one-way distance) and converted
    /// metres -> centimetres.
    pub fn from_round_trip(round_trip_micros: u64, temperature_c: f32) -> Self {
        let sound_speed = sound_speed_m_s(temperature_c);
        let distance_cm = round_trip_micros as f32 * 1e-6 * sound_speed * 0.5 * 100.0;
        Sample {
            temperature_c,
            round_trip_micros: Some(round_trip_micros),
            distance_cm,
        }
    }

    /// True when the measurement timed out and carries no usable distance.
    pub fn out_of_range(&self) -> bool {
        self.distance_cm.is_nan()
    }
}

/// Per-cycle proximity classification of a distance sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProximityState {
    /// Insufficient or invalid data to judge proximity
    Unknown,
    /// Object comfortably away from the sensor, or no object at all
    Nominal,
    /// Object inside the inbound band and closing across the re-sample
    Approaching,
    /// Object at or against the transducer, confirmed by an overflow re-sample
    Collision,
}

/// One cycle's worth of telemetry, handed to the log and network sinks
/// and then discarded. No record outlives its cycle.
#[derive(Debug, Clone)]
pub struct TelemetryRecord {
    pub device: &'static str,
    pub millis: u64,
    pub sample: Sample,
    pub state: ProximityState,
}

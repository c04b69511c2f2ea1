/// Time-of-flight range acquisition over a trigger/echo line pair
use crate::models::Sample;

/// Echo wait bound. Roughly a 5 m round trip at nominal sound speed;
/// keeps `measure` from blocking indefinitely on a missing echo.
pub const ECHO_TIMEOUT_MICROS: u64 = 30_000;

const TRIGGER_SETTLE_MICROS: u64 = 2;
const TRIGGER_PULSE_MICROS: u64 = 10;

/// Platform primitives behind the range sensor: the trigger line, a
/// microsecond delay, and an edge-pulse measurement on the echo line.
///
/// The implementation owns both GPIO lines outright, so the exclusive
/// `&mut` borrow taken by [`RangeSampler::measure`] is what keeps the
/// inherently sequential trigger/echo protocol single-owner.
pub trait RangeHardware {
    fn trigger_set_high(&mut self);
    fn trigger_set_low(&mut self);
    fn delay_micros(&mut self, micros: u64);

    /// Wait for the echo pulse and return its width in microseconds, or
    /// `None` if no echo arrived within `timeout_micros`.
    fn measure_echo_micros(&mut self, timeout_micros: u64) -> Option<u64>;
}

/// Drives one echo measurement and converts round-trip time into a
/// temperature-corrected distance.
pub struct RangeSampler<H: RangeHardware> {
    hardware: H,
    timeout_micros: u64,
}

impl<H: RangeHardware> RangeSampler<H> {
    pub fn new(hardware: H) -> Self {
        RangeSampler {
            hardware,
            timeout_micros: ECHO_TIMEOUT_MICROS,
        }
    }

    #[cfg(test)]
    pub fn with_timeout(hardware: H, timeout_micros: u64) -> Self {
        RangeSampler {
            hardware,
            timeout_micros,
        }
    }

    /// Take one measurement at the given ambient temperature.
    ///
    /// A timeout is a normal outcome (no reflecting object at range) and
    /// comes back as a NaN-distance sample, not an error.
    pub fn measure(&mut self, temperature_c: f32) -> Sample {
        // The sensor requires this exact pulse shape to arm a measurement:
        // settle low, then a 10 us high pulse.
        self.hardware.trigger_set_low();
        self.hardware.delay_micros(TRIGGER_SETTLE_MICROS);
        self.hardware.trigger_set_high();
        self.hardware.delay_micros(TRIGGER_PULSE_MICROS);
        self.hardware.trigger_set_low();

        // Some platforms report a timed-out pulse read as a zero width;
        // fold that into the timeout outcome.
        match self.hardware.measure_echo_micros(self.timeout_micros) {
            Some(round_trip_micros) if round_trip_micros > 0 => {
                Sample::from_round_trip(round_trip_micros, temperature_c)
            }
            _ => Sample::timeout(temperature_c),
        }
    }

    #[cfg(test)]
    pub fn hardware_ref(&self) -> &H {
        &self.hardware
    }
}

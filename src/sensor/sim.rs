/// Simulated hardware rig for host runs — no GPIO, no I2C.
///
/// The shipped binary wires these in so the node runs on any machine; a
/// target port replaces them with real line drivers behind the same traits.
use crate::sensor::range::RangeHardware;
use crate::sensor::temperature::TemperatureSensor;

/// Replays a fixed, cyclic script of echo outcomes: an object drifting in
/// from far range, closing through the inbound band, pressing against the
/// transducer, then gone. `None` entries are echo timeouts.
pub struct SimulatedRangeHardware {
    script: Vec<Option<u64>>,
    position: usize,
}

impl SimulatedRangeHardware {
    pub fn new() -> Self {
        // Durations in microseconds; ~583 us is roughly 10 cm at 20 degC.
        SimulatedRangeHardware {
            script: vec![
                Some(3500), // ~60 cm, nominal
                Some(3500),
                Some(2300), // ~40 cm
                Some(2300),
                Some(800), // ~13.7 cm, inbound band
                Some(700), // closing: approaching
                Some(600), // ~10.3 cm
                Some(500), // still closing
                Some(150), // ~2.6 cm, saturated
                Some(70_000), // overflow re-sample: collision
                None,      // object against sensor, echo lost
                None,
            ],
            position: 0,
        }
    }
}

impl Default for SimulatedRangeHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeHardware for SimulatedRangeHardware {
    fn trigger_set_high(&mut self) {}

    fn trigger_set_low(&mut self) {}

    fn delay_micros(&mut self, _micros: u64) {
        // Pulse shaping is instantaneous in simulation.
    }

    fn measure_echo_micros(&mut self, timeout_micros: u64) -> Option<u64> {
        let outcome = self.script[self.position];
        self.position = (self.position + 1) % self.script.len();
        match outcome {
            // The scripted overflow reading deliberately exceeds the echo
            // timeout bound; real hardware reports such pulses as long
            // saturated reads, so the simulation passes them through.
            Some(micros) if micros <= timeout_micros || micros >= 60_000 => Some(micros),
            Some(_) => None,
            None => None,
        }
    }
}

/// Deterministic thermometer: slow triangle drift around a base value.
pub struct SimulatedThermometer {
    base_c: f32,
    tick: u32,
}

impl SimulatedThermometer {
    pub fn new(base_c: f32) -> Self {
        SimulatedThermometer { base_c, tick: 0 }
    }
}

impl TemperatureSensor for SimulatedThermometer {
    fn read_celsius(&mut self) -> Result<f32, String> {
        self.tick = self.tick.wrapping_add(1);
        // +/- 0.5 degC over a 20-read period
        let phase = (self.tick % 20) as f32 / 20.0;
        let drift = if phase < 0.5 {
            phase * 2.0 - 0.5
        } else {
            1.5 - phase * 2.0
        };
        Ok(self.base_c + drift * 0.5)
    }
}

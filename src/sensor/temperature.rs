/// Ambient temperature source feeding the speed-of-sound correction.
///
/// A read may fail at any time; the pipeline probes once at startup
/// (failure there is fatal) and afterwards falls back to the last known
/// value on a failed read.
pub trait TemperatureSensor {
    fn read_celsius(&mut self) -> Result<f32, String>;
}

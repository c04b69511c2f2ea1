pub mod range;
pub mod sim;
pub mod temperature;

pub use range::{RangeHardware, RangeSampler};
pub use temperature::TemperatureSensor;

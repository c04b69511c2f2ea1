pub mod http;
pub mod payload;

pub use http::{build_client, send_record};
pub use payload::TelemetryPayload;

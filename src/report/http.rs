/// HTTP delivery of telemetry payloads
use reqwest::StatusCode;
use tokio::time::Duration;

use crate::report::payload::TelemetryPayload;

/// Cap on one POST, connection setup included. A stalled endpoint must
/// not silently stretch the sampling interval.
const HTTP_TIMEOUT_SECS: u64 = 5;

/// Build the client used for every report. Constructed once at startup;
/// reqwest pools the underlying connection across cycles.
pub fn build_client() -> Result<reqwest::Client, String> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()
        .map_err(|e| format!("Failed to build HTTP client: {}", e))
}

/// POST one payload to the configured endpoint and return the response
/// status. Transport failures come back as `Err`; an HTTP error status is
/// a valid response and is returned for the caller to log. Fire-and-forget:
/// no retry, the next cycle reports fresh data anyway.
pub async fn send_record(
    client: &reqwest::Client,
    api_url: &str,
    payload: &TelemetryPayload,
) -> Result<StatusCode, String> {
    let response = client
        .post(api_url)
        .json(payload)
        .send()
        .await
        .map_err(|e| format!("POST to {} failed: {}", api_url, e))?;

    Ok(response.status())
}

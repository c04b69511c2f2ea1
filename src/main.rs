mod classify;
mod config;
mod models;
mod report;
mod sensor;
mod utils;

use log::{debug, error, info, warn};
use std::time::Instant;
use time::OffsetDateTime;
use tokio::time::{sleep, Duration};

use classify::{classify, needs_confirmation};
use config::Config;
use models::{Sample, TelemetryRecord};
use report::{build_client, send_record, TelemetryPayload};
use sensor::sim::{SimulatedRangeHardware, SimulatedThermometer};
use sensor::{RangeHardware, RangeSampler, TemperatureSensor};
use utils::{format_datetime, format_record};

/// Node type identifier carried in every payload.
const DEVICE_ID: &str = "sonar-node";

/// Pause between cycles. Bounds the trigger rate so consecutive pulses do
/// not interfere acoustically, and keeps the endpoint from being flooded.
const CYCLE_INTERVAL_MS: u64 = 100;

const SIM_BASE_TEMPERATURE_C: f32 = 21.0;

/// One measurement cycle up to the classified record: primary reading,
/// optional confirmatory re-sample, classification.
fn acquire_record<H: RangeHardware>(
    sampler: &mut RangeSampler<H>,
    temperature_c: f32,
    millis: u64,
) -> TelemetryRecord {
    let primary = sampler.measure(temperature_c);

    // Second trigger only when the primary lands in a decision band; a
    // synthetic timeout sample stands in otherwise and the policy resolves
    // without it.
    let confirmatory = if needs_confirmation(&primary) {
        sampler.measure(temperature_c)
    } else {
        Sample::timeout(temperature_c)
    };

    let state = classify(&primary, &confirmatory);

    TelemetryRecord {
        device: DEVICE_ID,
        millis,
        sample: primary,
        state,
    }
}

async fn main_loop<H, T>(
    config: Config,
    mut sampler: RangeSampler<H>,
    mut thermometer: T,
) -> Result<(), Box<dyn std::error::Error>>
where
    H: RangeHardware,
    T: TemperatureSensor,
{
    info!("Starting sonar telemetry node");
    info!("Configured for network '{}'", config.wifi_ssid);
    debug!(
        "Network credential loaded ({} characters)",
        config.wifi_pass.len()
    );
    info!("Reporting to {}", config.api_url);

    let client = build_client()?;

    // Startup probe: a node that cannot read temperature cannot derive
    // distances, so failure here is fatal before the loop begins.
    let mut last_temperature_c = thermometer
        .read_celsius()
        .map_err(|e| format!("Temperature sensor unavailable at startup: {}", e))?;

    let started = Instant::now();
    info!(
        "Sampling loop started at: {}",
        format_datetime(&OffsetDateTime::now_utc())
    );

    loop {
        let temperature_c = match thermometer.read_celsius() {
            Ok(value) => {
                last_temperature_c = value;
                value
            }
            Err(e) => {
                warn!("Temperature read failed ({}), using last known value", e);
                last_temperature_c
            }
        };

        let millis = started.elapsed().as_millis() as u64;
        let record = acquire_record(&mut sampler, temperature_c, millis);

        info!("{}", format_record(&record));

        // Delivery outcome is logged, never retried within the cycle; the
        // next cycle reports fresh data regardless.
        let payload = TelemetryPayload::from_record(&record);
        match send_record(&client, &config.api_url, &payload).await {
            Ok(status) if status.is_success() => debug!("Report delivered: {}", status),
            Ok(status) => warn!("Report rejected with status {}", status),
            Err(e) => error!("Report delivery failed: {}", e),
        }

        sleep(Duration::from_millis(CYCLE_INTERVAL_MS)).await;
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_secs()
        .init();

    // Load configuration
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e);
        }
    };

    // The shipped binary runs on simulated hardware; a target port swaps
    // in real line drivers behind the same traits.
    let sampler = RangeSampler::new(SimulatedRangeHardware::new());
    let thermometer = SimulatedThermometer::new(SIM_BASE_TEMPERATURE_C);

    // Handle Ctrl+C gracefully
    let (tx, mut rx) = tokio::sync::oneshot::channel();
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for Ctrl+C");
        let _ = tx.send(());
    });

    // Run main loop or wait for shutdown signal
    tokio::select! {
        result = main_loop(config, sampler, thermometer) => {
            if let Err(e) = result {
                error!("Fatal error: {}", e);
                return Err(e);
            }
        }
        _ = &mut rx => {
            info!("Program terminated by user. Exiting gracefully.");
        }
    }

    Ok(())
}

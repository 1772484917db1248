mod telemetry;

use std::sync::Arc;
use std::time::Duration;

use aio_client::{Client, DataPoint, HttpTransport};
use chrono::Utc;
use clap::Parser;
use telemetry::SENSORS;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Pushes randomized device telemetry to cloud feeds.
#[derive(Debug, Parser)]
#[command(name = "simulator")]
struct Args {
    /// Account username on the telemetry service
    #[arg(long, env = "AIO_USERNAME")]
    username: String,

    /// Account API key
    #[arg(long, env = "AIO_KEY")]
    key: String,

    /// REST endpoint override
    #[arg(long, env = "AIO_BASE_URL", default_value = aio_client::DEFAULT_BASE_URL)]
    base_url: String,

    /// Number of simulated devices
    #[arg(long, env = "DEVICES", default_value_t = 10)]
    devices: usize,

    /// Seconds between send rounds
    #[arg(long, env = "INTERVAL_SECS", default_value_t = 10)]
    interval_secs: u64,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting IoT simulator");
    info!(
        "Endpoint: {}, Devices: {}, Interval: {}s",
        args.base_url, args.devices, args.interval_secs
    );

    let transport = match HttpTransport::new() {
        Ok(transport) => Arc::new(transport),
        Err(e) => {
            error!("Failed to build transport: {}", e);
            std::process::exit(1);
        }
    };

    let client = match Client::new(&args.username, &args.key, transport) {
        Ok(client) => client.with_base_url(&args.base_url),
        Err(e) => {
            error!("Failed to configure client: {}", e);
            std::process::exit(1);
        }
    };

    let mut rng = rand::thread_rng();
    let mut counter = 0u64;
    let mut ticker = tokio::time::interval(Duration::from_secs(args.interval_secs));

    loop {
        ticker.tick().await;

        for device in 0..args.devices {
            for sensor in SENSORS {
                let feed_key = format!("dev-{}.{}", device, sensor.feed_suffix());
                let point = DataPoint::new(sensor.sample(&mut rng)).with_created_at(Utc::now());

                match client.send_data_point(&feed_key, &point).await {
                    Ok(_) => counter += 1,
                    Err(e) => {
                        warn!("Failed to send to {}: {}", feed_key, e);
                    }
                }
            }
        }

        info!("Round complete, {} data points sent so far", counter);
    }
}

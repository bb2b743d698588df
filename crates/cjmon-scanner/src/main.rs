mod config;
mod telemetry;

use crate::config::ServiceConfig;
use crate::telemetry::{init_telemetry, LogFormat, TelemetryConfig};
use cjmon_payload::CjMonitorDecoder;
use cjmon_scanner::{scan, AdvertisementService, JsonLinesSink};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, BufReader};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() {
    let config = match ServiceConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let log_format = match LogFormat::parse(&config.log_format) {
        Ok(format) => format,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = init_telemetry(&TelemetryConfig {
        service_name: config.service_name.clone(),
        log_level: config.log_level.clone(),
        log_format,
    }) {
        eprintln!("Failed to initialize telemetry: {}", e);
        std::process::exit(1);
    }

    info!(
        manufacturer_id = config.manufacturer_id,
        input = config.input_path.as_deref().unwrap_or("stdin"),
        "Starting cjmon-scanner"
    );
    debug!("Configuration: {:?}", config);

    let decoder = Arc::new(CjMonitorDecoder::new(config.manufacturer_id));
    let sink = Arc::new(JsonLinesSink::new(tokio::io::stdout()));
    let service = AdvertisementService::new(decoder, sink);

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Received shutdown signal");
            signal_token.cancel();
        }
    });

    let reader: Box<dyn AsyncBufRead + Unpin + Send> = match &config.input_path {
        Some(path) => match tokio::fs::File::open(path).await {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(e) => {
                error!(path = %path, error = %e, "Failed to open input");
                std::process::exit(1);
            }
        },
        None => Box::new(BufReader::new(tokio::io::stdin())),
    };

    match scan(&service, reader, shutdown).await {
        Ok(summary) => {
            info!(
                lines = summary.lines,
                decoded = summary.decoded,
                ignored = summary.ignored,
                invalid = summary.invalid,
                "Scan finished"
            );
        }
        Err(e) => {
            error!(error = %e, "Scan failed");
            std::process::exit(1);
        }
    }
}

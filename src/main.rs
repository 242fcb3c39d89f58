//! `hotel-sim` entry point.
//!
//! Loads `.env`, builds the configuration (JSON file named by `HOTEL_CONFIG`, otherwise `HOTEL_*`
//! variables over the defaults), opens the hotel and runs until Ctrl-C or until `HOTEL_RUN_SECS`
//! elapses.

use std::env;
use std::fs;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use hotel_sim::config::HotelConfig;
use hotel_sim::core::{AppResult, Hotel, TracingEventSink};
use hotel_sim::util::init_tracing;
use tracing::Instrument;
use uuid::Uuid;

fn load_config() -> AppResult<HotelConfig> {
    let Ok(path) = env::var("HOTEL_CONFIG") else {
        let cfg = HotelConfig::from_env();
        return cfg.context("loading config from environment");
    };
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("reading config file {path}"))?;
    let cfg = HotelConfig::from_json_str(&raw);
    cfg.with_context(|| format!("loading {path}"))
}

fn run_limit() -> AppResult<Option<Duration>> {
    env::var("HOTEL_RUN_SECS")
        .ok()
        .map(|raw| {
            raw.trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .with_context(|| format!("HOTEL_RUN_SECS={raw}"))
        })
        .transpose()
}

async fn wait_for_stop(limit: Option<Duration>) -> AppResult<()> {
    match limit {
        Some(limit) => {
            tokio::select! {
                signal = tokio::signal::ctrl_c() => signal.context("listening for ctrl-c")?,
                () = tokio::time::sleep(limit) => tracing::info!(?limit, "run limit reached"),
            }
        }
        None => tokio::signal::ctrl_c()
            .await
            .context("listening for ctrl-c")?,
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> AppResult<()> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = load_config()?;
    let limit = run_limit()?;
    let span = tracing::info_span!("hotel", run_id = %Uuid::new_v4());

    async move {
        let hotel = Hotel::new(config, Arc::new(TracingEventSink))?;
        let running = hotel.start()?;

        wait_for_stop(limit).await?;

        running.shutdown();
        let snapshot = tokio::task::spawn_blocking(move || running.join())
            .await
            .context("joining actors")?;
        tracing::info!(
            snapshot = %serde_json::to_string(&snapshot)?,
            "final state"
        );
        Ok::<(), anyhow::Error>(())
    }
    .instrument(span)
    .await
}

//! Exchange-rate proxy server.
//!
//! This binary exposes a small HTTP API over the NBP exchange-rate service. Internally,
//! it wires together three building blocks:
//!
//! - `provider` — `RateProvider` trait and the `reqwest`-backed `NbpProvider` that
//!   fetches raw quotation tables and turns provider status codes into `RateError`s.
//! - `api` — the axum router. Each handler validates the request with `rate_common`,
//!   fetches and decodes the table, runs the spread or max/min analysis and shapes the
//!   response according to the `detailed` flag.
//! - `error` — conversion of `RateError` into HTTP responses.
//!
//! Concurrency and shutdown:
//! - Requests run as independent tokio tasks; the only shared value is the immutable
//!   `AppState` behind an `Arc`.
//! - Ctrl+C stops accepting connections and lets in-flight requests finish.
#![warn(missing_docs)]
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use log::{error, info};
use tokio::net::TcpListener;

use crate::api::AppState;
use crate::args::Args;
use crate::provider::NbpProvider;

mod api;
mod args;
mod error;
mod provider;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    let args = Args::parse();

    let provider = NbpProvider::new(&args.upstream_url, Duration::from_secs(args.timeout_secs))?;
    info!("Upstream provider: {}", args.upstream_url);
    let state = Arc::new(AppState::new(Arc::new(provider)));

    let listener = TcpListener::bind((args.host.as_str(), args.port)).await?;
    info!("Exchange-rate proxy listening on {}", listener.local_addr()?);

    axum::serve(listener, api::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Ctrl+C received. Shutting down server...");
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

//! Command-line arguments for the rate client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::{Parser, Subcommand};
use rate_common::RateQuery;
use rate_common::net::DEFAULT_SERVER_URL;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Base URL of the running proxy server.
    #[clap(long, env = "RATE_SERVER", default_value = DEFAULT_SERVER_URL)]
    pub server: String,

    /// Ask for the full structured result instead of the one-value summary.
    #[clap(long, global = true)]
    pub detailed: bool,

    /// Lookup to perform.
    #[command(subcommand)]
    pub lookup: Lookup,
}

/// Supported lookups, one per proxy endpoint.
#[derive(Debug, Subcommand)]
pub enum Lookup {
    /// Mid rate of a currency on a given day.
    Exchange {
        /// ISO-4217 code, uppercase (e.g. GBP).
        currency: String,
        /// Day in YYYY-MM-DD form.
        date: String,
    },
    /// Highest and lowest mid rate over the last N publications.
    MaxMin {
        /// ISO-4217 code, uppercase (e.g. GBP).
        currency: String,
        /// Number of trailing publications.
        #[clap(long)]
        quotations: String,
    },
    /// Widest bid/ask spread over the last N publications.
    Difference {
        /// ISO-4217 code, uppercase (e.g. GBP).
        currency: String,
        /// Number of trailing publications.
        #[clap(long)]
        quotations: String,
    },
}

impl Lookup {
    /// Query served by the proxy for this lookup. Not validated yet.
    pub fn to_query(&self) -> RateQuery {
        match self {
            Lookup::Exchange { currency, date } => RateQuery::exchange_rate(currency, date),
            Lookup::MaxMin {
                currency,
                quotations,
            } => RateQuery::max_min(currency, quotations),
            Lookup::Difference {
                currency,
                quotations,
            } => RateQuery::difference(currency, quotations),
        }
    }
}

//! Rate Client — a command-line client for the exchange-rate proxy. It validates the
//! lookup locally with the same rules the server applies, sends it to the proxy and
//! prints the answer to stdout.
//!
//! Usage example (CLI):
//! ```bash
//! rate_client exchange GBP 2022-09-08
//! rate_client --server http://10.0.0.5:8080 max-min GBP --quotations 10 --detailed
//! rate_client difference USD --quotations 5
//! ```
#![warn(missing_docs)]
mod args;
mod sender;

use crate::args::Args;
use crate::sender::{LookupSender, render};
use clap::Parser;
use log::error;
use rate_common::{RateError, Result};

#[tokio::main]
async fn main() -> Result<(), RateError> {
    init_logger();
    let args = Args::parse();

    let query = args.lookup.to_query();
    let sender = LookupSender::new(&args.server);

    match sender.send(&query, args.detailed).await {
        Ok(answer) => {
            println!("{}", render(&answer));
            Ok(())
        }
        Err(e) => {
            error!("Lookup failed: {}", e);
            Err(e)
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}

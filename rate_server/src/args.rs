//! Command-line arguments for the proxy server.
//!
//! Every option can also be supplied through the environment variable named next to it.
use clap::Parser;
use rate_common::net::{DEFAULT_PORT, DEFAULT_TIMEOUT_SECS, UPSTREAM_BASE_URL};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about = "Exchange-rate proxy with spread and max/min analytics", long_about = None)]
pub struct Args {
    /// Interface to bind.
    #[clap(long, env = "RATE_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// TCP port to listen on.
    #[clap(long, env = "RATE_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Base URL of the provider's rates API.
    #[clap(long, env = "RATE_UPSTREAM_URL", default_value = UPSTREAM_BASE_URL)]
    pub upstream_url: String,

    /// Provider request timeout, in seconds.
    #[clap(long, env = "RATE_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flags_override_defaults() {
        let args = Args::parse_from([
            "rate_server",
            "--host",
            "127.0.0.1",
            "--port",
            "9090",
            "--upstream-url",
            "http://localhost:1234/rates",
            "--timeout-secs",
            "3",
        ]);
        assert_eq!(args.host, "127.0.0.1");
        assert_eq!(args.port, 9090);
        assert_eq!(args.upstream_url, "http://localhost:1234/rates");
        assert_eq!(args.timeout_secs, 3);
    }

    #[test]
    fn rejects_non_numeric_port() {
        assert!(Args::try_parse_from(["rate_server", "--port", "http"]).is_err());
    }
}

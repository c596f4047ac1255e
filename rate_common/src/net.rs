//! Network defaults shared by the proxy server and the client.

/// Base URL of the provider's rates API; query paths are appended to it.
pub const UPSTREAM_BASE_URL: &str = "http://api.nbp.pl/api/exchangerates/rates";
/// Port the proxy listens on unless configured otherwise.
pub const DEFAULT_PORT: u16 = 8080;
/// Address the client expects the proxy at unless told otherwise.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";
/// Provider request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Joins a base URL and a path without doubling or dropping the slash between them.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

//! Sending lookups to the proxy server over HTTP.
//!
//! This module provides a small helper that builds the proxy URL for a `RateQuery`,
//! performs the request and turns non-success answers back into `RateError`s.
use log::{debug, info};
use rate_common::net::join_url;
use rate_common::validation::is_validation_message;
use rate_common::{RateError, RateQuery, Result};
use reqwest::{Client, StatusCode};
use serde_json::Value;

/// Helper type for sending lookups to the proxy.
pub struct LookupSender {
    client: Client,
    server: String,
}

impl LookupSender {
    /// Creates a sender for the proxy at `server`.
    pub fn new(server: &str) -> Self {
        Self {
            client: Client::new(),
            server: String::from(server),
        }
    }

    /// Validates `query` locally, then asks the proxy and returns the JSON answer.
    pub async fn send(&self, query: &RateQuery, detailed: bool) -> Result<Value> {
        query.validate()?;

        let url = join_url(&self.server, &query.proxy_path(detailed));
        info!("Sending lookup: GET {}", url);
        let response = self.client.get(&url).send().await.map_err(|e| RateError::UpstreamOther {
            status: StatusCode::BAD_GATEWAY.as_u16(),
            message: format!("Failed to reach proxy at {}: {}", self.server, e),
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| RateError::UpstreamOther {
            status: status.as_u16(),
            message: format!("Failed to read proxy answer: {}", e),
        })?;
        debug!("Proxy answered {}: {}", status, body);
        interpret(status, &body)
    }
}

/// Decodes a proxy answer; error bodies are JSON strings (or empty on 500).
fn interpret(status: StatusCode, body: &str) -> Result<Value> {
    if status.is_success() {
        return Ok(serde_json::from_str(body)?);
    }

    let message = match serde_json::from_str::<Value>(body) {
        Ok(Value::String(text)) => text,
        _ => String::from(status.canonical_reason().unwrap_or("Proxy error")),
    };
    match status {
        StatusCode::NOT_FOUND => Err(RateError::UpstreamNotFound),
        StatusCode::INTERNAL_SERVER_ERROR => Err(RateError::invalid_state(
            "the proxy could not compute a result from the provider data",
        )),
        StatusCode::BAD_REQUEST if is_validation_message(&message) => {
            Err(RateError::invalid_argument(message))
        }
        StatusCode::BAD_REQUEST => Err(RateError::UpstreamBadRequest(message)),
        other => Err(RateError::UpstreamOther {
            status: other.as_u16(),
            message,
        }),
    }
}

/// Human-readable form of a proxy answer: bare scalars as is, objects pretty-printed.
pub fn render(answer: &Value) -> String {
    match answer {
        Value::String(text) => text.clone(),
        Value::Number(n) => n.to_string(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

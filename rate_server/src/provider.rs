//! Upstream exchange-rate provider.
//!
//! `RateProvider` is the seam between the HTTP handlers and the outside world: it takes a
//! validated `RateQuery` and returns the raw JSON payload. `NbpProvider` implements it
//! with `reqwest` against the NBP rates API. Status handling:
//!
//! - 2xx — body returned as is, decoding is the caller's job.
//! - 404 — `UpstreamNotFound`.
//! - 400 — `UpstreamBadRequest` with the provider's text.
//! - anything else — `UpstreamOther` carrying the same status.
//! - no response at all — `UpstreamOther` with 502 (504 on timeout).
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use rate_common::net::join_url;
use rate_common::{RateError, RateQuery, Result};
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};

/// Source of raw quotation table payloads.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetches the payload answering `query`. The query is expected to be validated.
    async fn fetch(&self, query: &RateQuery) -> Result<String>;
}

/// `reqwest`-backed provider for the NBP API.
pub struct NbpProvider {
    client: Client,
    base_url: String,
}

impl NbpProvider {
    /// Builds a provider rooted at `base_url` with a per-request `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> std::result::Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: String::from(base_url),
        })
    }

    /// Full provider URL for `query`.
    pub fn url_for(&self, query: &RateQuery) -> String {
        join_url(&self.base_url, &query.upstream_path())
    }
}

#[async_trait]
impl RateProvider for NbpProvider {
    async fn fetch(&self, query: &RateQuery) -> Result<String> {
        let url = self.url_for(query);
        debug!("Upstream GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;
        debug!("Upstream answered {} ({} bytes)", status, body.len());
        check_status(status, body)
    }
}

/// Maps a provider status and body onto the payload or an upstream error.
pub(crate) fn check_status(status: StatusCode, body: String) -> Result<String> {
    if status.is_success() {
        return Ok(body);
    }

    let text = body.trim();
    let message = if text.is_empty() {
        String::from(status.canonical_reason().unwrap_or("Upstream error"))
    } else {
        String::from(text)
    };

    match status {
        StatusCode::NOT_FOUND => Err(RateError::UpstreamNotFound),
        StatusCode::BAD_REQUEST => Err(RateError::UpstreamBadRequest(message)),
        other => Err(RateError::UpstreamOther {
            status: other.as_u16(),
            message,
        }),
    }
}

fn transport_error(err: reqwest::Error) -> RateError {
    let status = if err.is_timeout() {
        StatusCode::GATEWAY_TIMEOUT
    } else {
        StatusCode::BAD_GATEWAY
    };
    RateError::UpstreamOther {
        status: status.as_u16(),
        message: format!("Upstream request failed: {}", err),
    }
}

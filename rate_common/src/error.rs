//! Error types shared between the proxy server and the client.
//!
//! The `RateError` enum is deliberately closed: the validation and analysis code only
//! ever produces `InvalidArgument` and `InvalidState`, while the three `Upstream*`
//! variants describe what the exchange-rate provider answered and are passed through
//! untouched so the HTTP layer can map them to a status code.
use thiserror::Error;

/// Unified error type for request validation, analysis and upstream failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RateError {
    /// The caller supplied a malformed request; detected before any I/O.
    #[error("{0}")]
    InvalidArgument(String),

    /// The data available for the computation is unusable (wrong table kind, empty
    /// table, missing rate field, undecodable payload).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The provider has no data for this query (HTTP 404).
    #[error("Data not found")]
    UpstreamNotFound,

    /// The provider rejected the query as outside its supported parameters (HTTP 400).
    #[error("{0}")]
    UpstreamBadRequest(String),

    /// Any other provider failure, carrying the status to pass through.
    #[error("{message}")]
    UpstreamOther {
        /// HTTP status reported by (or synthesized for) the provider.
        status: u16,
        /// Provider-supplied or transport-level description.
        message: String,
    },
}

impl RateError {
    /// Constructor for [`RateError::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Constructor for [`RateError::InvalidState`].
    pub fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidState(reason.into())
    }

    /// `true` for the variants that originate in the provider rather than in this crate.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::UpstreamNotFound | Self::UpstreamBadRequest(_) | Self::UpstreamOther { .. }
        )
    }
}

/// A payload that cannot be decoded is treated exactly like any other unusable data.
impl From<serde_json::Error> for RateError {
    fn from(err: serde_json::Error) -> Self {
        RateError::InvalidState(format!("cannot decode quotation table: {}", err))
    }
}

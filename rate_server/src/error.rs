//! HTTP mapping of `RateError`.
//!
//! | error                | status            | body                  |
//! |----------------------|-------------------|-----------------------|
//! | `InvalidArgument`    | 400               | JSON string message   |
//! | `InvalidState`       | 500               | empty                 |
//! | `UpstreamNotFound`   | 404               | `"Data not found"`    |
//! | `UpstreamBadRequest` | 400               | provider text         |
//! | `UpstreamOther`      | provider's status | provider text         |
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::{error, warn};
use rate_common::RateError;

/// Handler error: a `RateError` on its way to becoming a response.
#[derive(Debug)]
pub struct ApiError(pub RateError);

/// Result type returned by every handler.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl From<RateError> for ApiError {
    fn from(err: RateError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            RateError::InvalidArgument(_) | RateError::UpstreamBadRequest(_) => StatusCode::BAD_REQUEST,
            RateError::InvalidState(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RateError::UpstreamNotFound => StatusCode::NOT_FOUND,
            RateError::UpstreamOther { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self.0 {
            RateError::InvalidState(reason) => {
                error!("Request failed on unusable data: {}", reason);
                status.into_response()
            }
            err => {
                let origin = if err.is_upstream() { "provider" } else { "validation" };
                if status.is_server_error() {
                    error!("Request failed at {} ({}): {}", origin, status, err);
                } else {
                    warn!("Request rejected by {} ({}): {}", origin, status, err);
                }
                (status, Json(err.to_string())).into_response()
            }
        }
    }
}

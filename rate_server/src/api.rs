//! HTTP routes of the proxy.
//!
//! - `GET /api/exchange/{currency}/{date}` — mid rate on a given day.
//! - `GET /api/exchange/{currency}/max-min?quotations=N` — highest and lowest mid rate.
//! - `GET /api/buy-and-sell/{currency}/difference?quotations=N` — widest bid/ask spread.
//!
//! Every route accepts `detailed=true|false` (default `false`). Each request is handled
//! as validate → fetch → decode → analyze → shape; validation failures never reach the
//! provider.
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use log::info;
use rate_common::analysis::{DifferenceResult, RangeResult, compute_major_difference, compute_max_and_min};
use rate_common::report::{ExactDecimal, Report, shape};
use rate_common::validation::MISSING_QUOTATIONS_MESSAGE;
use rate_common::{QuotationTable, RateError, RateQuery, Result};
use serde::Deserialize;

use crate::error::ApiResult;
use crate::provider::RateProvider;

/// Shared, read-only application state.
pub struct AppState {
    provider: Arc<dyn RateProvider>,
}

impl AppState {
    /// Wraps the provider used for every request.
    pub fn new(provider: Arc<dyn RateProvider>) -> Self {
        Self { provider }
    }

    async fn fetch_table(&self, query: &RateQuery) -> Result<QuotationTable> {
        query.validate()?;
        let raw = self.provider.fetch(query).await?;
        QuotationTable::from_json(&raw)
    }
}

#[derive(Debug, Deserialize)]
struct DetailParams {
    #[serde(default)]
    detailed: bool,
}

#[derive(Debug, Deserialize)]
struct WindowParams {
    quotations: Option<String>,
    #[serde(default)]
    detailed: bool,
}

impl WindowParams {
    fn quotations(&self) -> Result<&str> {
        self.quotations
            .as_deref()
            .ok_or_else(|| RateError::invalid_argument(MISSING_QUOTATIONS_MESSAGE))
    }
}

async fn get_exchange_rate(
    State(state): State<Arc<AppState>>,
    Path((currency, date)): Path<(String, String)>,
    Query(params): Query<DetailParams>,
) -> ApiResult<Json<Report<QuotationTable, ExactDecimal>>> {
    let query = RateQuery::exchange_rate(&currency, &date);
    info!("Exchange rate request: {:?}, detailed={}", query, params.detailed);

    let table = state.fetch_table(&query).await?;
    Ok(Json(shape(table, params.detailed)?))
}

async fn get_max_and_min(
    State(state): State<Arc<AppState>>,
    Path(currency): Path<String>,
    Query(params): Query<WindowParams>,
) -> ApiResult<Json<Report<RangeResult, String>>> {
    let query = RateQuery::max_min(&currency, params.quotations()?);
    info!("Max/min request: {:?}, detailed={}", query, params.detailed);

    let table = state.fetch_table(&query).await?;
    let range = compute_max_and_min(&table)?;
    Ok(Json(shape(range, params.detailed)?))
}

async fn get_major_difference(
    State(state): State<Arc<AppState>>,
    Path(currency): Path<String>,
    Query(params): Query<WindowParams>,
) -> ApiResult<Json<Report<DifferenceResult, ExactDecimal>>> {
    let query = RateQuery::difference(&currency, params.quotations()?);
    info!("Difference request: {:?}, detailed={}", query, params.detailed);

    let table = state.fetch_table(&query).await?;
    let difference = compute_major_difference(&table)?;
    Ok(Json(shape(difference, params.detailed)?))
}

/// Builds the router over `state`.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/exchange/{currency}/max-min", get(get_max_and_min))
        .route("/api/exchange/{currency}/{date}", get(get_exchange_rate))
        .route("/api/buy-and-sell/{currency}/difference", get(get_major_difference))
        .with_state(state)
}

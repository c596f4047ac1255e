//!
//! Validation and analytics shared by the exchange-rate proxy server and client.
//!
//! This crate aggregates:
//! - `error` — closed error enum `RateError` used across the workspace.
//! - `result` — `Result<T, RateError>` alias.
//! - `validation` — lexical checks of currency codes, dates and quotation counts.
//! - `table` — quotation table model decoded from the provider payload.
//! - `query` — the supported lookups and their provider/proxy URLs.
//! - `analysis` — widest bid/ask spread and max/min mid rate.
//! - `report` — detailed vs. summary response shaping.
//! - `net` — networking defaults and URL helpers.
//!
//! Nothing here performs I/O or logs.
#![warn(missing_docs)]
pub mod analysis;
pub mod error;
pub mod net;
pub mod query;
pub mod report;
pub mod result;
pub mod table;
pub mod validation;

pub use error::RateError;
pub use query::RateQuery;
pub use result::Result;
pub use table::{Quotation, QuotationTable, TableKind};

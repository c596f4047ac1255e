//! Response shaping: full structured result or a scalar summary.
//!
//! Every endpoint takes a `detailed` flag. With it the caller receives the whole
//! value (table, range or difference); without it a single scalar.
use rust_decimal::Decimal;
use serde::Serialize;

use crate::analysis::{DifferenceResult, RangeResult};
use crate::error::RateError;
use crate::result::Result;
use crate::table::QuotationTable;

/// A decimal written as a JSON number with exactly its published digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExactDecimal(#[serde(with = "rust_decimal::serde::arbitrary_precision")] pub Decimal);

/// Values that have a scalar short form.
pub trait Summarize {
    /// Scalar form of the value.
    type Summary: Serialize;

    /// Builds the scalar form; fails with `InvalidState` if the value lacks the field
    /// the summary is made of.
    fn summarize(&self) -> Result<Self::Summary>;
}

/// Single-day lookups summarize to the mid rate of the first record.
impl Summarize for QuotationTable {
    type Summary = ExactDecimal;

    fn summarize(&self) -> Result<ExactDecimal> {
        match self.rates.first() {
            Some(rate) => rate.mid_rate().map(ExactDecimal),
            None => Err(RateError::invalid_state("table has no rates")),
        }
    }
}

impl Summarize for RangeResult {
    type Summary = String;

    fn summarize(&self) -> Result<String> {
        self.summary_line()
    }
}

impl Summarize for DifferenceResult {
    type Summary = ExactDecimal;

    fn summarize(&self) -> Result<ExactDecimal> {
        Ok(ExactDecimal(self.difference))
    }
}

/// Body of a successful response. Serialized without a tag, so the JSON is either the
/// detailed object or the bare scalar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report<D, S> {
    /// Full value.
    Detailed(D),
    /// Scalar form.
    Summary(S),
}

/// Picks the detailed or the summary form of `value`.
pub fn shape<T: Summarize>(value: T, detailed: bool) -> Result<Report<T, T::Summary>> {
    if detailed {
        Ok(Report::Detailed(value))
    } else {
        value.summarize().map(Report::Summary)
    }
}

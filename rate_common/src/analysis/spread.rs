//! Widest bid/ask spread within a `C` table.
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::RateError;
use crate::result::Result;
use crate::table::{Quotation, QuotationTable, TableKind};

/// Largest observed `|ask - bid|` and the quotation it came from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DifferenceResult {
    /// Non-negative spread.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub difference: Decimal,
    /// First quotation, in table order, with that spread.
    pub rate: Quotation,
}

/// Scans the table in order and keeps the first quotation whose spread is strictly
/// greater than everything before it.
///
/// Fails with `InvalidState` when the table is not of kind `C`, has no rates, or any
/// record lacks a bid or an ask. There is no partial result: one malformed record
/// invalidates the whole table.
pub fn compute_major_difference(table: &QuotationTable) -> Result<DifferenceResult> {
    let rates = table.rates_of_kind(TableKind::C)?;

    // -1 is below any absolute spread, so the first record always takes the lead.
    let mut best: (Decimal, Option<&Quotation>) = (Decimal::NEGATIVE_ONE, None);
    for rate in rates {
        let spread = rate.spread()?;
        if spread > best.0 {
            best = (spread, Some(rate));
        }
    }

    match best {
        (difference, Some(rate)) => Ok(DifferenceResult {
            difference,
            rate: rate.clone(),
        }),
        (_, None) => Err(RateError::invalid_state("no quotation produced a spread")),
    }
}

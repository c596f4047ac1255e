//! Quotation table model decoded from the provider's JSON payload.
//!
//! A table is the envelope the provider returns for one currency: its kind, the
//! currency name and code, and the rates in chronological order. Which rate fields
//! are populated depends on the kind, so every field is optional here and the
//! accessors ([`Quotation::mid_rate`], [`Quotation::spread`]) fail instead of guessing.
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::error::RateError;
use crate::result::Result;

/// Kind of quotation table published by the provider.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Display, EnumString, Hash, Eq, PartialEq)]
pub enum TableKind {
    /// Mid rates of the main currencies.
    A,
    /// Mid rates of the remaining currencies.
    B,
    /// Bid and ask rates.
    C,
}

/// One dated rate record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Quotation {
    /// Provider serial number, e.g. `174/A/NBP/2022`.
    pub no: String,
    /// Day the rate applies to.
    pub effective_date: NaiveDate,
    /// Bid rate (kind `C` only).
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    pub bid: Option<Decimal>,
    /// Ask rate (kind `C` only).
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    pub ask: Option<Decimal>,
    /// Mid rate (kinds `A` and `B`).
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    pub mid: Option<Decimal>,
}

impl Quotation {
    /// Builds a mid-rate record.
    pub fn with_mid(no: &str, effective_date: NaiveDate, mid: Decimal) -> Self {
        Quotation {
            no: String::from(no),
            effective_date,
            bid: None,
            ask: None,
            mid: Some(mid),
        }
    }

    /// Builds a bid/ask record.
    pub fn with_bid_ask(no: &str, effective_date: NaiveDate, bid: Decimal, ask: Decimal) -> Self {
        Quotation {
            no: String::from(no),
            effective_date,
            bid: Some(bid),
            ask: Some(ask),
            mid: None,
        }
    }

    /// The mid rate, or `InvalidState` when the record has none.
    pub fn mid_rate(&self) -> Result<Decimal> {
        self.mid
            .ok_or_else(|| RateError::invalid_state(format!("quotation {} has no mid rate", self.no)))
    }

    /// `|ask - bid|`, or `InvalidState` when either side is missing.
    pub fn spread(&self) -> Result<Decimal> {
        match (self.bid, self.ask) {
            (Some(bid), Some(ask)) => Ok((ask - bid).abs()),
            _ => Err(RateError::invalid_state(format!(
                "quotation {} has no bid/ask pair",
                self.no
            ))),
        }
    }
}

/// Response envelope for one currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuotationTable {
    /// Table kind; decides which rate fields are present.
    pub table: TableKind,
    /// Display name of the currency, e.g. `funt szterling`.
    pub currency: String,
    /// ISO-4217 code.
    pub code: String,
    /// Rates in the order the provider returned them.
    pub rates: Vec<Quotation>,
}

impl QuotationTable {
    /// Decodes the provider's JSON payload.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Returns the rates if the table is of `kind` and not empty.
    pub fn rates_of_kind(&self, kind: TableKind) -> Result<&[Quotation]> {
        if self.table != kind {
            return Err(RateError::invalid_state(format!(
                "expected table {}, got {}",
                kind, self.table
            )));
        }
        if self.rates.is_empty() {
            return Err(RateError::invalid_state(format!("table {} has no rates", kind)));
        }
        Ok(&self.rates)
    }
}

//! Requests the proxy understands and how they map onto provider and proxy URLs.
//!
//! A `RateQuery` is built from raw, unchecked path/query strings and validated before
//! it is handed to anything that performs I/O. The same type is used by the server (to
//! build the provider URL) and by the client (to build the proxy URL).
use crate::result::Result;
use crate::table::TableKind;
use crate::validation::{validate_currency_code, validate_date, validate_quotation_count};

/// One of the three supported lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateQuery {
    /// Mid rate of `currency` on `date`.
    ExchangeRate {
        /// ISO-4217 code.
        currency: String,
        /// `YYYY-MM-DD`.
        date: String,
    },
    /// Highest and lowest mid rate over the last `quotations` publications.
    MaxMin {
        /// ISO-4217 code.
        currency: String,
        /// Count as received, digits only.
        quotations: String,
    },
    /// Widest bid/ask spread over the last `quotations` publications.
    Difference {
        /// ISO-4217 code.
        currency: String,
        /// Count as received, digits only.
        quotations: String,
    },
}

impl RateQuery {
    /// Creates a single-day mid rate query.
    pub fn exchange_rate(currency: &str, date: &str) -> Self {
        RateQuery::ExchangeRate {
            currency: String::from(currency),
            date: String::from(date),
        }
    }

    /// Creates a max/min mid rate query.
    pub fn max_min(currency: &str, quotations: &str) -> Self {
        RateQuery::MaxMin {
            currency: String::from(currency),
            quotations: String::from(quotations),
        }
    }

    /// Creates a bid/ask spread query.
    pub fn difference(currency: &str, quotations: &str) -> Self {
        RateQuery::Difference {
            currency: String::from(currency),
            quotations: String::from(quotations),
        }
    }

    /// Currency code, whatever the variant.
    pub fn currency(&self) -> &str {
        match self {
            RateQuery::ExchangeRate { currency, .. }
            | RateQuery::MaxMin { currency, .. }
            | RateQuery::Difference { currency, .. } => currency,
        }
    }

    /// Table the provider must be asked for.
    pub fn table_kind(&self) -> TableKind {
        match self {
            RateQuery::ExchangeRate { .. } | RateQuery::MaxMin { .. } => TableKind::A,
            RateQuery::Difference { .. } => TableKind::C,
        }
    }

    /// Checks the currency first, then the date or count. Performs no I/O.
    pub fn validate(&self) -> Result<()> {
        validate_currency_code(self.currency())?;
        match self {
            RateQuery::ExchangeRate { date, .. } => validate_date(date),
            RateQuery::MaxMin { quotations, .. } | RateQuery::Difference { quotations, .. } => {
                validate_quotation_count(quotations)
            }
        }
    }

    /// Provider path relative to its rates base URL, trailing slash included,
    /// e.g. `/C/GBP/last/10/`.
    pub fn upstream_path(&self) -> String {
        let kind = self.table_kind();
        match self {
            RateQuery::ExchangeRate { currency, date } => format!("/{}/{}/{}/", kind, currency, date),
            RateQuery::MaxMin {
                currency,
                quotations,
            }
            | RateQuery::Difference {
                currency,
                quotations,
            } => format!("/{}/{}/last/{}/", kind, currency, quotations),
        }
    }

    /// Proxy path and query string served by `rate_server`.
    pub fn proxy_path(&self, detailed: bool) -> String {
        match self {
            RateQuery::ExchangeRate { currency, date } => {
                format!("/api/exchange/{}/{}?detailed={}", currency, date, detailed)
            }
            RateQuery::MaxMin {
                currency,
                quotations,
            } => format!(
                "/api/exchange/{}/max-min?quotations={}&detailed={}",
                currency, quotations, detailed
            ),
            RateQuery::Difference {
                currency,
                quotations,
            } => format!(
                "/api/buy-and-sell/{}/difference?quotations={}&detailed={}",
                currency, quotations, detailed
            ),
        }
    }
}

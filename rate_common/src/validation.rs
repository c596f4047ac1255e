//! Syntactic checks applied to request parameters before the provider is contacted.
//!
//! The checks are purely lexical. Semantic limits (a date that does not exist, more
//! quotations than the provider serves) are left to the provider, which reports them
//! as an upstream error.
use crate::error::RateError;
use crate::result::Result;

/// Message returned for a malformed currency code.
pub const CURRENCY_MESSAGE: &str = "Currency must be in ISO-4217 standard";
/// Message returned for a malformed quotation count.
pub const QUOTATIONS_MESSAGE: &str = "Quotations must be a positive integer";
/// Message returned for a malformed date.
pub const DATE_MESSAGE: &str = "Date must be in ISO-8601 standard";
/// Message returned when a window endpoint is called without a quotation count.
pub const MISSING_QUOTATIONS_MESSAGE: &str = "quotations parameter is required in the path";

/// `true` if `message` is one of the rejections produced by this module or by a
/// missing quotation count, as opposed to text relayed from the provider.
pub fn is_validation_message(message: &str) -> bool {
    [CURRENCY_MESSAGE, QUOTATIONS_MESSAGE, DATE_MESSAGE, MISSING_QUOTATIONS_MESSAGE].contains(&message)
}

/// Accepts exactly three uppercase ASCII letters. Lowercase is rejected, not normalized.
pub fn validate_currency_code(code: &str) -> Result<()> {
    if code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase()) {
        Ok(())
    } else {
        Err(RateError::invalid_argument(CURRENCY_MESSAGE))
    }
}

/// Accepts a non-empty run of ASCII digits, including leading zeros and values the
/// provider will later refuse (e.g. above 255).
pub fn validate_quotation_count(raw: &str) -> Result<()> {
    if is_digits(raw) {
        Ok(())
    } else {
        Err(RateError::invalid_argument(QUOTATIONS_MESSAGE))
    }
}

/// Accepts the `DDDD-DD-DD` shape only; `2022-13-40` passes.
pub fn validate_date(raw: &str) -> Result<()> {
    let mut parts = raw.split('-');
    let shape_ok = matches!(
        (parts.next(), parts.next(), parts.next(), parts.next()),
        (Some(y), Some(m), Some(d), None)
            if y.len() == 4 && m.len() == 2 && d.len() == 2
                && is_digits(y) && is_digits(m) && is_digits(d)
    );
    if shape_ok {
        Ok(())
    } else {
        Err(RateError::invalid_argument(DATE_MESSAGE))
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

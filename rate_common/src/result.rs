//! `Result` alias used by validation, decoding and analysis.
//!
//! Every fallible operation in the workspace fails with a [`RateError`], so the
//! alias fixes that as the default error parameter.
use crate::error::RateError;

/// `std::result::Result` defaulting to [`RateError`].
pub type Result<T, E = RateError> = std::result::Result<T, E>;

//! Statistics derived from a single quotation table.
//!
//! - `spread` — widest bid/ask spread of a `C` table; the first record reaching the
//!   maximum wins.
//! - `range` — highest and lowest mid rate of an `A` table; on ties the last record
//!   wins, for both ends.
//!
//! Both are pure functions over a borrowed table: no I/O, no logging, no shared state.
pub mod range;
pub mod spread;

pub use range::{RangeResult, compute_max_and_min};
pub use spread::{DifferenceResult, compute_major_difference};

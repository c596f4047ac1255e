//! Highest and lowest mid rate within an `A` table.
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::result::Result;
use crate::table::{Quotation, QuotationTable, TableKind};

/// The quotations holding the highest and the lowest mid rate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RangeResult {
    /// Last quotation, in table order, with the highest mid.
    pub max_rate: Quotation,
    /// Last quotation, in table order, with the lowest mid.
    pub min_rate: Quotation,
}

impl RangeResult {
    /// One-line summary, `Max rate: X, Min rate: Y`, with the decimals as published.
    pub fn summary_line(&self) -> Result<String> {
        Ok(format!(
            "Max rate: {}, Min rate: {}",
            self.max_rate.mid_rate()?,
            self.min_rate.mid_rate()?
        ))
    }
}

/// Finds the highest and lowest mid rate.
///
/// Ties resolve to the **last** matching record for the maximum and for the minimum,
/// independently. A one-record table yields that record for both.
///
/// Fails with `InvalidState` when the table is not of kind `A`, has no rates, or any
/// record has no mid rate.
pub fn compute_max_and_min(table: &QuotationTable) -> Result<RangeResult> {
    let rates = table.rates_of_kind(TableKind::A)?;

    let mids = rates
        .iter()
        .map(|rate| rate.mid_rate().map(|mid| (mid, rate)))
        .collect::<Result<Vec<(Decimal, &Quotation)>>>()?;

    let (mut max, mut min) = (mids[0], mids[0]);
    for &(mid, rate) in &mids[1..] {
        if mid >= max.0 {
            max = (mid, rate);
        }
        if mid <= min.0 {
            min = (mid, rate);
        }
    }

    Ok(RangeResult {
        max_rate: max.1.clone(),
        min_rate: min.1.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fixtures::{bid_ask, mid, table};
    use crate::error::RateError;
    use rust_decimal_macros::dec;

    #[test]
    fn distinct_mids_select_max_and_min() {
        let first = mid("1/A/NBP/2012", dec!(1.6));
        let second = mid("2/A/NBP/2012", dec!(1.8));
        let result = compute_max_and_min(&table(TableKind::A, vec![first.clone(), second.clone()])).unwrap();

        assert_eq!(result.max_rate, second);
        assert_eq!(result.min_rate, first);
    }

    #[test]
    fn equal_mids_select_the_last_record_for_both() {
        let first = mid("1/A/NBP/2012", dec!(1.6));
        let second = mid("2/A/NBP/2012", dec!(1.6));
        let result = compute_max_and_min(&table(TableKind::A, vec![first, second.clone()])).unwrap();

        assert_eq!(result.max_rate.no, "2/A/NBP/2012");
        assert_eq!(result.min_rate.no, "2/A/NBP/2012");
        assert_eq!(result.max_rate, second);
        assert_eq!(result.min_rate, second);
    }

    #[test]
    fn ties_resolve_independently_at_each_end() {
        let rates = vec![
            mid("1/A/NBP/2012", dec!(4.50)),
            mid("2/A/NBP/2012", dec!(4.10)),
            mid("3/A/NBP/2012", dec!(4.5)),
            mid("4/A/NBP/2012", dec!(4.1)),
            mid("5/A/NBP/2012", dec!(4.3)),
        ];
        let result = compute_max_and_min(&table(TableKind::A, rates)).unwrap();

        assert_eq!(result.max_rate.no, "3/A/NBP/2012");
        assert_eq!(result.min_rate.no, "4/A/NBP/2012");
    }

    #[test]
    fn single_record_is_both_max_and_min() {
        let only = mid("1/A/NBP/2012", dec!(5.4322));
        let result = compute_max_and_min(&table(TableKind::A, vec![only.clone()])).unwrap();

        assert_eq!(result.max_rate, only);
        assert_eq!(result.min_rate, only);
    }

    #[test]
    fn summary_line_keeps_published_precision() {
        let rates = vec![mid("1/A/NBP/2012", dec!(1.6)), mid("2/A/NBP/2012", dec!(1.80))];
        let result = compute_max_and_min(&table(TableKind::A, rates)).unwrap();

        assert_eq!(result.summary_line().unwrap(), "Max rate: 1.80, Min rate: 1.6");
    }

    #[test]
    fn decoded_trailing_zeros_survive_into_the_summary() {
        let raw = r#"{"table": "A", "currency": "frank szwajcarski", "code": "CHF", "rates": [
            {"no": "1/A/NBP/2022", "effectiveDate": "2022-09-07", "mid": 4.5800},
            {"no": "2/A/NBP/2022", "effectiveDate": "2022-09-08", "mid": 4.6100}
        ]}"#;
        let result = compute_max_and_min(&QuotationTable::from_json(raw).unwrap()).unwrap();

        assert_eq!(result.summary_line().unwrap(), "Max rate: 4.6100, Min rate: 4.5800");
    }

    #[test]
    fn wrong_kind_is_rejected() {
        let rates = vec![bid_ask("1/C/NBP/2012", dec!(1.5), dec!(1.7))];
        let err = compute_max_and_min(&table(TableKind::C, rates)).unwrap_err();
        assert!(matches!(err, RateError::InvalidState(_)));
    }

    #[test]
    fn empty_table_is_rejected() {
        let err = compute_max_and_min(&table(TableKind::A, Vec::new())).unwrap_err();
        assert!(matches!(err, RateError::InvalidState(_)));
    }

    #[test]
    fn missing_mid_is_rejected() {
        let mut blank = mid("2/A/NBP/2012", dec!(1.6));
        blank.mid = None;
        let rates = vec![mid("1/A/NBP/2012", dec!(1.7)), blank];
        let err = compute_max_and_min(&table(TableKind::A, rates)).unwrap_err();
        assert!(matches!(err, RateError::InvalidState(_)));
    }
}

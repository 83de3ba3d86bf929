//! View models for computed portfolio metrics.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::constants::PERCENT_DECIMAL_PRECISION;

/// Sum of market value for one asset class.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassAllocation {
    pub asset_class: String,
    pub value: f64,
}

/// The single holding with the highest market value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LargestHolding {
    pub ticker: String,
    pub market_value: f64,
}

/// Aggregate snapshot of the stored holdings. Computed per run, never
/// persisted.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Sum of market value across all holdings; 0.0 when the store is
    /// empty.
    pub total: f64,
    /// Per-class sums, sorted descending by value. Equal values keep
    /// first-seen asset class order.
    pub by_class: Vec<ClassAllocation>,
    /// Holding with the maximum market value; the first encountered wins
    /// ties. `None` when the store is empty.
    pub largest: Option<LargestHolding>,
}

/// Share of `value` in `total` as a display percentage.
///
/// Rounds to one decimal place with banker's rounding (round-half-even)
/// and always carries exactly one fractional digit, so a full portfolio
/// renders as `100.0`.
pub fn display_percent(value: f64, total: f64) -> Decimal {
    let mut pct = if total > 0.0 {
        let ratio = Decimal::from_f64(value / total).unwrap_or(Decimal::ZERO);
        (ratio * dec!(100)).round_dp(PERCENT_DECIMAL_PRECISION)
    } else {
        Decimal::ZERO
    };
    pct.rescale(PERCENT_DECIMAL_PRECISION);
    pct
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_percent_keeps_one_fractional_digit() {
        assert_eq!(display_percent(1500.0, 1500.0).to_string(), "100.0");
        assert_eq!(display_percent(9000.0, 10000.0).to_string(), "90.0");
        assert_eq!(display_percent(1.0, 3.0).to_string(), "33.3");
    }

    #[test]
    fn test_display_percent_rounds_half_even() {
        assert_eq!(display_percent(4025.0, 10000.0).to_string(), "40.2");
        assert_eq!(display_percent(4035.0, 10000.0).to_string(), "40.4");
    }

    #[test]
    fn test_display_percent_with_zero_total() {
        assert_eq!(display_percent(100.0, 0.0).to_string(), "0.0");
    }
}

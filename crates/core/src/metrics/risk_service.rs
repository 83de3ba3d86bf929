//! Risk concentration checks over the stored holdings.

use log::debug;

use crate::constants::{CLASS_CONCENTRATION_LIMIT, HOLDING_CONCENTRATION_LIMIT};
use crate::holdings::Holding;
use crate::metrics::metrics_model::display_percent;
use crate::metrics::summary_service::sum_by_class;

/// Computes ordered, human-readable risk flags for the holdings set.
///
/// With no value on the books, the single no-holdings flag is returned and
/// every other check is skipped. Otherwise the holding-concentration check
/// runs first, then the asset-class check; each appends its flag only when
/// triggered, so both, one, or neither may appear.
pub fn risk_flags(holdings: &[Holding]) -> Vec<String> {
    let total: f64 = holdings.iter().map(|h| h.market_value).sum();

    if total <= 0.0 {
        return vec!["No holdings found (total portfolio value is 0).".to_string()];
    }

    let mut flags = Vec::new();

    let mut top_holding: Option<&Holding> = None;
    for holding in holdings {
        if top_holding.map_or(true, |best| holding.market_value > best.market_value) {
            top_holding = Some(holding);
        }
    }
    if let Some(holding) = top_holding {
        if holding.market_value / total > HOLDING_CONCENTRATION_LIMIT {
            flags.push(format!(
                "Holding concentration risk: {} is {}% of portfolio (> 40%).",
                holding.ticker,
                display_percent(holding.market_value, total)
            ));
        }
    }

    let groups = sum_by_class(holdings);
    if let Some(group) = groups.first() {
        if group.value / total > CLASS_CONCENTRATION_LIMIT {
            flags.push(format!(
                "Asset class concentration risk: {} is {}% of portfolio (> 60%).",
                group.asset_class,
                display_percent(group.value, total)
            ));
        }
    }

    debug!("Risk checks produced {} flag(s)", flags.len());
    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_portfolio_returns_only_no_holdings_flag() {
        assert_eq!(
            risk_flags(&[]),
            vec!["No holdings found (total portfolio value is 0).".to_string()]
        );
    }

    #[test]
    fn test_single_holding_triggers_both_checks() {
        let holdings = vec![Holding::new("AAPL", 10.0, 150.0, "Equity")];

        assert_eq!(
            risk_flags(&holdings),
            vec![
                "Holding concentration risk: AAPL is 100.0% of portfolio (> 40%).".to_string(),
                "Asset class concentration risk: Equity is 100.0% of portfolio (> 60%).".to_string(),
            ]
        );
    }

    #[test]
    fn test_concentrated_holding_and_class() {
        let holdings = vec![
            Holding::new("AAPL", 10.0, 100.0, "Equity"),
            Holding::new("BND", 90.0, 100.0, "Bond"),
        ];

        assert_eq!(
            risk_flags(&holdings),
            vec![
                "Holding concentration risk: BND is 90.0% of portfolio (> 40%).".to_string(),
                "Asset class concentration risk: Bond is 90.0% of portfolio (> 60%).".to_string(),
            ]
        );
    }

    #[test]
    fn test_class_flag_without_holding_flag() {
        // Bond is 90% as a class, but no single holding exceeds 40%
        let holdings = vec![
            Holding::new("AAPL", 10.0, 100.0, "Equity"),
            Holding::new("BND", 30.0, 100.0, "Bond"),
            Holding::new("TLT", 30.0, 100.0, "Bond"),
            Holding::new("AGG", 30.0, 100.0, "Bond"),
        ];

        assert_eq!(
            risk_flags(&holdings),
            vec!["Asset class concentration risk: Bond is 90.0% of portfolio (> 60%).".to_string()]
        );
    }

    #[test]
    fn test_holding_flag_without_class_flag() {
        // GLD is 50% of the portfolio but no class exceeds 60%
        let holdings = vec![
            Holding::new("GLD", 50.0, 100.0, "Commodity"),
            Holding::new("AAPL", 25.0, 100.0, "Equity"),
            Holding::new("BND", 25.0, 100.0, "Bond"),
        ];

        assert_eq!(
            risk_flags(&holdings),
            vec!["Holding concentration risk: GLD is 50.0% of portfolio (> 40%).".to_string()]
        );
    }

    #[test]
    fn test_diversified_portfolio_has_no_flags() {
        let holdings = vec![
            Holding::new("AAPL", 30.0, 100.0, "Equity"),
            Holding::new("BND", 35.0, 100.0, "Bond"),
            Holding::new("GLD", 35.0, 100.0, "Commodity"),
        ];

        assert!(risk_flags(&holdings).is_empty());
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        // Exactly 40% / 60% must not trigger either check
        let holdings = vec![
            Holding::new("AAPL", 40.0, 100.0, "Equity"),
            Holding::new("BND", 20.0, 100.0, "Equity"),
            Holding::new("GLD", 40.0, 100.0, "Commodity"),
        ];

        assert!(risk_flags(&holdings).is_empty());
    }
}

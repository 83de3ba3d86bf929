//! Aggregate summary over the stored holdings.

use std::collections::HashMap;

use log::debug;

use crate::holdings::Holding;
use crate::metrics::metrics_model::{ClassAllocation, LargestHolding, PortfolioSummary};

/// Computes the portfolio summary over the full holdings set.
///
/// Reads the set once. Group order before sorting is first-seen asset
/// class, so equal-value groups stay in scan order after the stable
/// descending sort. The largest holding keeps the first encountered among
/// equals.
pub fn summarize(holdings: &[Holding]) -> PortfolioSummary {
    let total: f64 = holdings.iter().map(|h| h.market_value).sum();
    let by_class = sum_by_class(holdings);

    let mut largest: Option<&Holding> = None;
    for holding in holdings {
        if largest.map_or(true, |best| holding.market_value > best.market_value) {
            largest = Some(holding);
        }
    }

    debug!("Summarized {} holding(s), total value {total}", holdings.len());

    PortfolioSummary {
        total,
        by_class,
        largest: largest.map(|h| LargestHolding {
            ticker: h.ticker.clone(),
            market_value: h.market_value,
        }),
    }
}

/// Sums market value per asset class, preserving first-seen class order,
/// then stable-sorts descending by value.
pub(crate) fn sum_by_class(holdings: &[Holding]) -> Vec<ClassAllocation> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<ClassAllocation> = Vec::new();

    for holding in holdings {
        match positions.get(holding.asset_class.as_str()) {
            Some(&index) => groups[index].value += holding.market_value,
            None => {
                positions.insert(holding.asset_class.as_str(), groups.len());
                groups.push(ClassAllocation {
                    asset_class: holding.asset_class.clone(),
                    value: holding.market_value,
                });
            }
        }
    }

    groups.sort_by(|a, b| b.value.total_cmp(&a.value));
    groups
}

//! Domain model for portfolio holdings.

use serde::{Deserialize, Serialize};

/// A single position in one ticker.
///
/// `market_value` is derived from `shares * price` when the holding is
/// constructed and kept in sync by the mutators; it is never set
/// independently. No rounding is applied at this layer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Normalized identifier: trimmed, uppercased, never empty.
    pub ticker: String,
    pub shares: f64,
    pub price: f64,
    /// Free-form category label, trimmed, never empty.
    pub asset_class: String,
    pub market_value: f64,
}

impl Holding {
    pub fn new(
        ticker: impl Into<String>,
        shares: f64,
        price: f64,
        asset_class: impl Into<String>,
    ) -> Self {
        Holding {
            ticker: ticker.into(),
            shares,
            price,
            asset_class: asset_class.into(),
            market_value: shares * price,
        }
    }

    /// Replaces the share count and recomputes the market value.
    pub fn set_shares(&mut self, shares: f64) {
        self.shares = shares;
        self.market_value = self.shares * self.price;
    }

    /// Replaces the price and recomputes the market value.
    pub fn set_price(&mut self, price: f64) {
        self.price = price;
        self.market_value = self.shares * self.price;
    }
}

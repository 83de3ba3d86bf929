//! Database models for holdings.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use ledgerfolio_core::holdings::Holding;

/// Database row for a stored holding.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::holdings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct HoldingRecord {
    pub id: i32,
    pub ticker: String,
    pub shares: f64,
    pub price: f64,
    pub asset_class: String,
    pub market_value: f64,
}

/// Database model for inserting a holding. The id is generated by the
/// store.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::holdings)]
#[serde(rename_all = "camelCase")]
pub struct NewHoldingRecord {
    pub ticker: String,
    pub shares: f64,
    pub price: f64,
    pub asset_class: String,
    pub market_value: f64,
}

// Conversion to and from the domain model

impl From<HoldingRecord> for Holding {
    fn from(db: HoldingRecord) -> Self {
        Holding {
            ticker: db.ticker,
            shares: db.shares,
            price: db.price,
            asset_class: db.asset_class,
            market_value: db.market_value,
        }
    }
}

impl From<&Holding> for NewHoldingRecord {
    fn from(domain: &Holding) -> Self {
        NewHoldingRecord {
            ticker: domain.ticker.clone(),
            shares: domain.shares,
            price: domain.price,
            asset_class: domain.asset_class.clone(),
            market_value: domain.market_value,
        }
    }
}

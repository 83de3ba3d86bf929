//! Row validation and normalization.
//!
//! Turns raw tabular records into well-formed [`Holding`]s. The only fatal
//! outcome is a required column missing from the header; individual bad
//! rows are recorded as discards and never abort the run, so messy input
//! degrades to fewer valid holdings.

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::constants::REQUIRED_COLUMNS;
use crate::errors::{IngestError, Result};
use crate::holdings::Holding;
use crate::ingest::csv_reader::RawTable;

/// Why a row was excluded from the accepted set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DiscardReason {
    /// Every cell in the row was empty.
    BlankRow,
    /// A required value was empty or could not be coerced to its type.
    MissingValue(&'static str),
    /// Shares or price was zero or negative.
    NonPositive(&'static str),
}

impl fmt::Display for DiscardReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscardReason::BlankRow => write!(f, "blank row"),
            DiscardReason::MissingValue(field) => write!(f, "missing or unparsable '{field}'"),
            DiscardReason::NonPositive(field) => write!(f, "non-positive '{field}'"),
        }
    }
}

/// A discarded input row, indexed from the first data row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscardedRow {
    pub row_index: usize,
    pub reason: DiscardReason,
}

/// Outcome of validating one input table.
///
/// Discards are data, not failures; they are kept inspectable so callers
/// can report how much of the input survived.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// Accepted holdings, in input order.
    pub holdings: Vec<Holding>,
    /// Discarded rows with reasons, ordered by row index.
    pub discards: Vec<DiscardedRow>,
}

/// Column positions of the required fields within one input table.
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    ticker: usize,
    shares: usize,
    price: usize,
    asset_class: usize,
}

impl ColumnMap {
    /// Resolves the required columns against the header names, once per
    /// file. Extra columns are ignored and order is irrelevant.
    fn from_headers(headers: &[String]) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);

        match (find("ticker"), find("shares"), find("price"), find("asset_class")) {
            (Some(ticker), Some(shares), Some(price), Some(asset_class)) => Ok(ColumnMap {
                ticker,
                shares,
                price,
                asset_class,
            }),
            _ => {
                let mut missing: Vec<String> = REQUIRED_COLUMNS
                    .iter()
                    .filter(|name| find(name).is_none())
                    .map(|name| name.to_string())
                    .collect();
                missing.sort();
                Err(IngestError::MissingColumns(missing).into())
            }
        }
    }
}

/// Validates and normalizes raw records into holdings.
///
/// The whole-file schema check runs first against the header names and is
/// the only fatal outcome. Rows are then processed in order: blank rows
/// are discarded, ticker and asset class are trimmed (ticker uppercased),
/// shares and price are coerced to numbers with unparsable values treated
/// as missing, and rows with missing or non-positive values are discarded
/// with a reason. Accepted holdings keep their input order.
pub fn validate(table: &RawTable) -> Result<ValidationReport> {
    let columns = ColumnMap::from_headers(&table.headers)?;

    let mut report = ValidationReport::default();
    for (row_index, row) in table.rows.iter().enumerate() {
        match validate_row(row, &columns) {
            Ok(holding) => report.holdings.push(holding),
            Err(reason) => {
                debug!("Discarding row {row_index}: {reason}");
                report.discards.push(DiscardedRow { row_index, reason });
            }
        }
    }

    debug!(
        "Validation kept {} of {} row(s)",
        report.holdings.len(),
        table.rows.len()
    );
    Ok(report)
}

fn validate_row(row: &[String], columns: &ColumnMap) -> std::result::Result<Holding, DiscardReason> {
    if row.iter().all(|cell| cell.trim().is_empty()) {
        return Err(DiscardReason::BlankRow);
    }

    let cell = |index: usize| row.get(index).map(String::as_str).unwrap_or("");

    let ticker = cell(columns.ticker).trim().to_uppercase();
    let asset_class = cell(columns.asset_class).trim().to_string();

    if ticker.is_empty() {
        return Err(DiscardReason::MissingValue("ticker"));
    }
    let shares = parse_number(cell(columns.shares)).ok_or(DiscardReason::MissingValue("shares"))?;
    let price = parse_number(cell(columns.price)).ok_or(DiscardReason::MissingValue("price"))?;
    if asset_class.is_empty() {
        return Err(DiscardReason::MissingValue("asset_class"));
    }

    if shares <= 0.0 {
        return Err(DiscardReason::NonPositive("shares"));
    }
    if price <= 0.0 {
        return Err(DiscardReason::NonPositive("price"));
    }

    Ok(Holding::new(ticker, shares, price, asset_class))
}

/// Coerces a cell to a number. Unparsable values become missing rather
/// than errors.
fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }

    fn holdings_table(rows: &[&[&str]]) -> RawTable {
        table(&["ticker", "shares", "price", "asset_class"], rows)
    }

    #[test]
    fn test_accepts_well_formed_rows_in_order() {
        let report = validate(&holdings_table(&[
            &["AAPL", "10", "150", "Equity"],
            &["BND", "90", "100", "Bond"],
        ]))
        .unwrap();

        assert!(report.discards.is_empty());
        assert_eq!(
            report.holdings,
            vec![
                Holding::new("AAPL", 10.0, 150.0, "Equity"),
                Holding::new("BND", 90.0, 100.0, "Bond"),
            ]
        );
    }

    #[test]
    fn test_missing_columns_fail_with_sorted_names() {
        let err = validate(&table(&["ticker", "asset_class"], &[])).unwrap_err();
        match err {
            Error::Ingest(IngestError::MissingColumns(missing)) => {
                assert_eq!(missing, vec!["price", "shares"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_schema_check_ignores_extra_columns_and_order() {
        let report = validate(&table(
            &["currency", "price", "asset_class", "ticker", "shares"],
            &[&["USD", "150", "Equity", "AAPL", "10"]],
        ))
        .unwrap();

        assert_eq!(report.holdings, vec![Holding::new("AAPL", 10.0, 150.0, "Equity")]);
    }

    #[test]
    fn test_ticker_is_trimmed_and_uppercased() {
        let report = validate(&holdings_table(&[&["  aapl ", "10", "150", " Equity "]])).unwrap();

        assert_eq!(report.holdings[0].ticker, "AAPL");
        assert_eq!(report.holdings[0].asset_class, "Equity");
    }

    #[test]
    fn test_blank_row_is_discarded() {
        let report = validate(&holdings_table(&[
            &["", "  ", "", ""],
            &["AAPL", "10", "150", "Equity"],
        ]))
        .unwrap();

        assert_eq!(report.holdings.len(), 1);
        assert_eq!(
            report.discards,
            vec![DiscardedRow {
                row_index: 0,
                reason: DiscardReason::BlankRow,
            }]
        );
    }

    #[test]
    fn test_non_numeric_shares_is_discarded_silently() {
        let report = validate(&holdings_table(&[
            &["AAPL", "abc", "150", "Equity"],
            &["BND", "90", "100", "Bond"],
        ]))
        .unwrap();

        assert_eq!(report.holdings.len(), 1);
        assert_eq!(report.holdings[0].ticker, "BND");
        assert_eq!(
            report.discards,
            vec![DiscardedRow {
                row_index: 0,
                reason: DiscardReason::MissingValue("shares"),
            }]
        );
    }

    #[test]
    fn test_empty_ticker_and_class_are_discarded() {
        let report = validate(&holdings_table(&[
            &["   ", "10", "150", "Equity"],
            &["AAPL", "10", "150", "  "],
        ]))
        .unwrap();

        assert!(report.holdings.is_empty());
        assert_eq!(report.discards[0].reason, DiscardReason::MissingValue("ticker"));
        assert_eq!(report.discards[1].reason, DiscardReason::MissingValue("asset_class"));
    }

    #[test]
    fn test_non_positive_shares_and_price_are_discarded() {
        let report = validate(&holdings_table(&[
            &["AAPL", "0", "150", "Equity"],
            &["MSFT", "-5", "150", "Equity"],
            &["BND", "10", "0", "Bond"],
            &["TLT", "10", "-1", "Bond"],
        ]))
        .unwrap();

        assert!(report.holdings.is_empty());
        assert_eq!(
            report
                .discards
                .iter()
                .map(|d| d.reason)
                .collect::<Vec<_>>(),
            vec![
                DiscardReason::NonPositive("shares"),
                DiscardReason::NonPositive("shares"),
                DiscardReason::NonPositive("price"),
                DiscardReason::NonPositive("price"),
            ]
        );
    }

    #[test]
    fn test_duplicate_tickers_are_both_kept() {
        let report = validate(&holdings_table(&[
            &["AAPL", "10", "150", "Equity"],
            &["AAPL", "5", "150", "Equity"],
        ]))
        .unwrap();

        assert_eq!(report.holdings.len(), 2);
        assert_eq!(report.holdings[0].market_value, 1500.0);
        assert_eq!(report.holdings[1].market_value, 750.0);
    }

    #[test]
    fn test_market_value_is_exact_product() {
        let report = validate(&holdings_table(&[&["VTI", "2.5", "242.8", "Equity"]])).unwrap();
        let holding = &report.holdings[0];
        assert_eq!(holding.market_value, holding.shares * holding.price);
    }

    #[test]
    fn test_scientific_notation_parses() {
        let report = validate(&holdings_table(&[&["CASHX", "5e3", "1", "Cash"]])).unwrap();
        assert_eq!(report.holdings[0].shares, 5000.0);
    }
}

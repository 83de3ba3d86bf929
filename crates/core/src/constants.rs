/// Columns the input file must declare, by name. Column order in the file
/// is irrelevant; extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 4] = ["ticker", "shares", "price", "asset_class"];

/// A single holding above this share of total value triggers a risk flag.
pub const HOLDING_CONCENTRATION_LIMIT: f64 = 0.40;

/// A single asset class above this share of total value triggers a risk flag.
pub const CLASS_CONCENTRATION_LIMIT: f64 = 0.60;

/// Decimal places for percentage display.
pub const PERCENT_DECIMAL_PRECISION: u32 = 1;

/// Decimal places for currency display.
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Input file consumed when no path is given on the command line.
pub const DEFAULT_INPUT_PATH: &str = "data/sample_portfolio.csv";

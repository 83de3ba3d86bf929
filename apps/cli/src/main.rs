//! Ledgerfolio command-line entry point.
//!
//! Thin glue around the core pipeline: parse arguments, open the store,
//! run one batch pass, print the report.
//!
//! # Usage
//!
//! ```bash
//! # Load the bundled sample portfolio
//! ledgerfolio
//!
//! # Load a custom file, clearing previously stored holdings first
//! ledgerfolio --file holdings.csv --reset-db
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use ledgerfolio_core::constants::DEFAULT_INPUT_PATH;
use ledgerfolio_core::pipeline::{self, PipelineConfig};
use ledgerfolio_core::reporting;
use ledgerfolio_storage_sqlite::{db, HoldingRepository};

/// Ledgerfolio - holdings CSV → SQLite → analytics report
#[derive(Parser)]
#[command(name = "ledgerfolio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the portfolio holdings CSV
    #[arg(long, default_value = DEFAULT_INPUT_PATH)]
    file: PathBuf,

    /// Clear stored holdings before inserting the new batch
    #[arg(long)]
    reset_db: bool,

    /// Path of the SQLite database file
    #[arg(long, default_value = "ledgerfolio.db")]
    db_path: String,
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let pool = db::init(&cli.db_path)?;
    let repository = HoldingRepository::new(pool);

    let config = PipelineConfig {
        input_path: cli.file.clone(),
        reset_store: cli.reset_db,
    };
    let outcome = pipeline::run(&config, &repository)?;

    print!("{}", reporting::render_report(&outcome, &cli.file));
    Ok(())
}

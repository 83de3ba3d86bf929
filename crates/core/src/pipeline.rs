//! End-to-end batch pipeline: load file → store → compute metrics.

use std::path::PathBuf;

use log::info;
use serde::Serialize;

use crate::errors::Result;
use crate::holdings::HoldingRepositoryTrait;
use crate::ingest::{self, DiscardedRow, ValidationReport};
use crate::metrics::{self, PortfolioSummary};

/// Run configuration, passed explicitly into the entry point.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Path of the holdings CSV to ingest.
    pub input_path: PathBuf,
    /// Clear all stored holdings before inserting the new batch.
    pub reset_store: bool,
}

/// Everything a report needs from one pipeline run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineOutcome {
    /// Rows persisted this run.
    pub inserted: usize,
    /// Input rows excluded during validation, with reasons.
    pub discards: Vec<DiscardedRow>,
    pub summary: PortfolioSummary,
    pub risk_flags: Vec<String>,
}

/// Runs one sequential pass: read → validate → persist → scan → metrics.
///
/// Metrics are computed from the scanned store contents rather than the
/// in-memory accepted rows, so holdings persisted by earlier runs count
/// unless `reset_store` is set.
pub fn run(
    config: &PipelineConfig,
    repository: &dyn HoldingRepositoryTrait,
) -> Result<PipelineOutcome> {
    info!("Ingesting holdings from {}", config.input_path.display());
    let table = ingest::read_table(&config.input_path)?;
    let ValidationReport { holdings, discards } = ingest::validate(&table)?;
    info!(
        "Validated {} row(s), discarded {}",
        holdings.len(),
        discards.len()
    );

    repository.initialize()?;
    if config.reset_store {
        let removed = repository.clear()?;
        info!("Cleared {removed} previously stored holding(s)");
    }
    let inserted = repository.bulk_insert(&holdings)?;
    info!("Inserted {inserted} holding(s)");

    let stored = repository.scan_all()?;
    let summary = metrics::summarize(&stored);
    let risk_flags = metrics::risk_flags(&stored);

    Ok(PipelineOutcome {
        inserted,
        discards,
        summary,
        risk_flags,
    })
}

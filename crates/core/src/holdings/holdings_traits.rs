//! Repository trait for holdings persistence.

use crate::errors::Result;
use crate::holdings::Holding;

/// Persistence contract for holdings, implemented by the storage crate.
///
/// The pipeline only sees this trait. Holdings are written once per run in
/// bulk, optionally preceded by a full clear, and never individually
/// updated or deleted; identity is the store's own generated row id.
pub trait HoldingRepositoryTrait: Send + Sync {
    /// Ensures the holdings table exists. Idempotent.
    fn initialize(&self) -> Result<()>;

    /// Removes every stored holding. Returns the number of rows removed.
    fn clear(&self) -> Result<usize>;

    /// Appends all given holdings. Each row receives a generated id; there
    /// is no upsert or merge. Returns the number of rows inserted.
    fn bulk_insert(&self, holdings: &[Holding]) -> Result<usize>;

    /// Returns every stored holding in insertion order, field values
    /// exactly as inserted.
    fn scan_all(&self) -> Result<Vec<Holding>>;
}

//! Diesel-backed holdings repository.

use std::sync::Arc;

use diesel::prelude::*;
use log::debug;

use ledgerfolio_core::holdings::{Holding, HoldingRepositoryTrait};
use ledgerfolio_core::Result;

use super::model::{HoldingRecord, NewHoldingRecord};
use crate::db::{get_connection, run_migrations, DbPool};
use crate::errors::StorageError;
use crate::schema::holdings::dsl::*;

/// Holdings repository over a SQLite connection pool.
///
/// The batch pipeline writes holdings once per run and never updates
/// individual rows, so every operation is a straight table-level statement.
pub struct HoldingRepository {
    pool: Arc<DbPool>,
}

impl HoldingRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        HoldingRepository { pool }
    }
}

impl HoldingRepositoryTrait for HoldingRepository {
    fn initialize(&self) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        run_migrations(&mut conn)
    }

    fn clear(&self) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        let removed = diesel::delete(holdings)
            .execute(&mut conn)
            .map_err(StorageError::from)?;
        debug!("Cleared {removed} holding row(s)");
        Ok(removed)
    }

    fn bulk_insert(&self, items: &[Holding]) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        let records: Vec<NewHoldingRecord> = items.iter().map(NewHoldingRecord::from).collect();
        let inserted = diesel::insert_into(holdings)
            .values(&records)
            .execute(&mut conn)
            .map_err(StorageError::from)?;
        debug!("Inserted {inserted} holding row(s)");
        Ok(inserted)
    }

    fn scan_all(&self) -> Result<Vec<Holding>> {
        let mut conn = get_connection(&self.pool)?;
        let records = holdings
            .order(id.asc())
            .load::<HoldingRecord>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(records.into_iter().map(Holding::from).collect())
    }
}

//! Database connection management and migrations.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use log::info;

use ledgerfolio_core::errors::{DatabaseError, Result};

use crate::errors::StorageError;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Creates the database file if needed, builds the pool, and brings the
/// schema up to date.
pub fn init(db_path: &str) -> Result<Arc<DbPool>> {
    if !Path::new(db_path).exists() {
        create_db_file(db_path)?;
    }

    let pool = create_pool(db_path)?;
    let mut conn = get_connection(&pool)?;
    run_migrations(&mut conn)?;

    info!("Database ready at {db_path}");
    Ok(pool)
}

/// Builds an r2d2 connection pool for the given database path.
pub fn create_pool(db_path: &str) -> Result<Arc<DbPool>> {
    let manager = ConnectionManager::<SqliteConnection>::new(db_path);
    let pool = Pool::builder()
        .build(manager)
        .map_err(StorageError::from)?;
    Ok(Arc::new(pool))
}

/// Checks out a connection from the pool.
pub fn get_connection(pool: &DbPool) -> Result<DbConnection> {
    pool.get().map_err(|e| StorageError::PoolError(e).into())
}

/// Applies any pending embedded migrations. Idempotent.
pub fn run_migrations(conn: &mut SqliteConnection) -> Result<()> {
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| StorageError::MigrationFailed(e.to_string()))?;
    Ok(())
}

fn create_db_file(db_path: &str) -> Result<()> {
    let path = Path::new(db_path);
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)
                .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;
        }
    }
    fs::File::create(path).map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;
    Ok(())
}

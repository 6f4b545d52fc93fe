use crate::{DbError, Result};

use std::panic::Location;
use std::path::{Path, PathBuf};
use std::time::Duration;

use error_location::ErrorLocation;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_BUSY_TIMEOUT_SECS: u64 = 5;

/// Tuning for a file-backed pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseOptions {
    pub path: PathBuf,
    pub max_connections: u32,
    pub busy_timeout: Duration,
}

impl DatabaseOptions {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            busy_timeout: Duration::from_secs(DEFAULT_BUSY_TIMEOUT_SECS),
        }
    }
}

/// Opens SQLite pools with the schema migrated
pub struct Database;

impl Database {
    /// Open (creating if needed) the database file, then run migrations
    pub async fn open(options: &DatabaseOptions) -> Result<SqlitePool> {
        Self::ensure_parent_dir(&options.path).await?;

        let connect = SqliteConnectOptions::new()
            .filename(&options.path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(options.busy_timeout)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(options.max_connections)
            .connect_with(connect)
            .await?;

        log::info!(
            "Opened database at {} (max {} connections)",
            options.path.display(),
            options.max_connections
        );

        Self::run_migrations(&pool).await?;

        Ok(pool)
    }

    /// Private in-memory database on a single long-lived connection
    pub async fn open_in_memory() -> Result<SqlitePool> {
        let connect = SqliteConnectOptions::new()
            .filename(":memory:")
            .foreign_keys(true);

        // Dropping the only connection would drop the database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(connect)
            .await?;

        Self::run_migrations(&pool).await?;

        Ok(pool)
    }

    pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(pool)
            .await
            .map_err(|e| DbError::Migration {
                message: format!("Migration failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        log::debug!("Database migrations applied");

        Ok(())
    }

    /// Cheap round trip used by readiness checks
    pub async fn ping(pool: &SqlitePool) -> Result<()> {
        sqlx::query("SELECT 1").execute(pool).await?;
        Ok(())
    }

    async fn ensure_parent_dir(path: &Path) -> Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| DbError::Initialization {
                        message: format!(
                            "Failed to create database directory {}: {}",
                            parent.display(),
                            e
                        ),
                        location: ErrorLocation::from(Location::caller()),
                    })
            }
            _ => Ok(()),
        }
    }
}

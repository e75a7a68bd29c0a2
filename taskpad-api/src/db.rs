//! Database Connection Pool and Postgres Note Store
//!
//! PostgreSQL connection pooling via deadpool-postgres, plus the
//! `PgNoteStore` implementation of the `NoteStore` trait backed by a
//! single `notes` table (see `schema.sql`).

use std::time::Duration;

use async_trait::async_trait;
use deadpool_postgres::{Config, ManagerConfig, Pool, PoolConfig, RecyclingMethod, Runtime};
use tokio_postgres::NoTls;

use crate::error::{ApiError, ApiResult};
use taskpad_core::{new_note_id, NewNote, Note, NoteId, StoreError, StoreResult};
use taskpad_storage::NoteStore;

// ============================================================================
// CONNECTION POOL CONFIGURATION
// ============================================================================

/// Database connection pool configuration.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// PostgreSQL host
    pub host: String,
    /// PostgreSQL port
    pub port: u16,
    /// Database name
    pub dbname: String,
    /// Database user
    pub user: String,
    /// Database password
    pub password: String,
    /// Maximum pool size
    pub max_size: usize,
    /// Connection timeout
    pub timeout: Duration,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            dbname: "taskpad".to_string(),
            user: "postgres".to_string(),
            password: "".to_string(),
            max_size: 16,
            timeout: Duration::from_secs(30),
        }
    }
}

impl DbConfig {
    /// Create a new database configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("TASKPAD_DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            port: std::env::var("TASKPAD_DB_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5432),
            dbname: std::env::var("TASKPAD_DB_NAME").unwrap_or_else(|_| "taskpad".to_string()),
            user: std::env::var("TASKPAD_DB_USER").unwrap_or_else(|_| "postgres".to_string()),
            password: std::env::var("TASKPAD_DB_PASSWORD").unwrap_or_default(),
            max_size: std::env::var("TASKPAD_DB_POOL_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(16),
            timeout: Duration::from_secs(
                std::env::var("TASKPAD_DB_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
        }
    }

    /// Create a connection pool from this configuration.
    pub fn create_pool(&self) -> ApiResult<Pool> {
        let mut cfg = Config::new();
        cfg.host = Some(self.host.clone());
        cfg.port = Some(self.port);
        cfg.dbname = Some(self.dbname.clone());
        cfg.user = Some(self.user.clone());
        cfg.password = Some(self.password.clone());

        cfg.manager = Some(ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        });

        let mut pool_cfg = PoolConfig::new(self.max_size);
        pool_cfg.timeouts.wait = Some(self.timeout);
        pool_cfg.timeouts.create = Some(self.timeout);
        cfg.pool = Some(pool_cfg);

        let pool = cfg
            .create_pool(Some(Runtime::Tokio1), NoTls)
            .map_err(|e| ApiError::database_error(format!("Failed to create pool: {}", e)))?;

        Ok(pool)
    }
}

// ============================================================================
// POSTGRES NOTE STORE
// ============================================================================

/// Postgres-backed note store wrapping a connection pool.
#[derive(Clone)]
pub struct PgNoteStore {
    pool: Pool,
}

impl PgNoteStore {
    /// Create a new store with the given pool.
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// Create a new store from configuration.
    pub fn from_config(config: &DbConfig) -> ApiResult<Self> {
        let pool = config.create_pool()?;
        Ok(Self::new(pool))
    }

    /// Get a connection from the pool.
    async fn get_conn(&self) -> StoreResult<deadpool_postgres::Object> {
        self.pool.get().await.map_err(|e| StoreError::Unavailable {
            reason: format!("connection pool: {}", e),
        })
    }

    /// Map a row from the `notes` table into a `Note`.
    fn row_to_note(row: &tokio_postgres::Row) -> StoreResult<Note> {
        let priority: String = row.get("priority");
        let status: String = row.get("status");

        Ok(Note {
            note_id: row.get("note_id"),
            title: row.get("title"),
            description: row.get("description"),
            due_date: row.get("due_date"),
            priority: priority.parse().map_err(|_| StoreError::Backend {
                reason: format!("unknown priority value '{}'", priority),
            })?,
            status: status.parse().map_err(|_| StoreError::Backend {
                reason: format!("unknown status value '{}'", status),
            })?,
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }
}

fn backend_err(err: tokio_postgres::Error) -> StoreError {
    StoreError::Backend {
        reason: err.to_string(),
    }
}

#[async_trait]
impl NoteStore for PgNoteStore {
    async fn note_insert(&self, note: NewNote) -> StoreResult<NoteId> {
        let conn = self.get_conn().await?;
        let id = new_note_id();

        conn.execute(
            "INSERT INTO notes \
             (note_id, title, description, due_date, priority, status, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
            &[
                &id,
                &note.title,
                &note.description,
                &note.due_date,
                &note.priority.as_str(),
                &note.status.as_str(),
                &note.created_at,
                &note.updated_at,
            ],
        )
        .await
        .map_err(backend_err)?;

        Ok(id)
    }

    async fn note_delete(&self, id: NoteId) -> StoreResult<u64> {
        let conn = self.get_conn().await?;
        conn.execute("DELETE FROM notes WHERE note_id = $1", &[&id])
            .await
            .map_err(backend_err)
    }

    async fn note_list_all(&self) -> StoreResult<Vec<Note>> {
        let conn = self.get_conn().await?;
        let rows = conn
            .query(
                "SELECT note_id, title, description, due_date, priority, status, \
                 created_at, updated_at FROM notes ORDER BY note_id",
                &[],
            )
            .await
            .map_err(backend_err)?;

        rows.iter().map(Self::row_to_note).collect()
    }

    async fn ping(&self) -> StoreResult<()> {
        let conn = self.get_conn().await?;
        conn.query_one("SELECT 1", &[])
            .await
            .map(|_| ())
            .map_err(backend_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_config_defaults() {
        let config = DbConfig::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 5432);
        assert_eq!(config.dbname, "taskpad");
        assert_eq!(config.max_size, 16);
    }

    #[test]
    fn test_create_pool_applies_size_and_timeouts() {
        let config = DbConfig {
            max_size: 4,
            timeout: Duration::from_secs(7),
            ..DbConfig::default()
        };

        // Pool creation is lazy, so no database is needed here.
        let pool = config.create_pool().unwrap();
        assert_eq!(pool.status().max_size, 4);
        assert_eq!(pool.timeouts().wait, Some(Duration::from_secs(7)));
        assert_eq!(pool.timeouts().create, Some(Duration::from_secs(7)));
    }
}

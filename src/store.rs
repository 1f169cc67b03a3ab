//! SQLite persistence for the maintenance state record.
//!
//! A single key/value row holds the JSON-encoded [`MaintenanceState`].
//! Loading is deliberately infallible: a missing row, an unreadable database,
//! or a malformed record all fall back to the default state so the service
//! can always start.

use anyhow::Result;
use chrono::Utc;
use sqlx::{Pool, Sqlite, SqlitePool};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::state::MaintenanceState;

const STATE_KEY: &str = "maintenance_state";

pub struct StateStore {
    pool: Pool<Sqlite>,
}

impl StateStore {
    /// Expose pool for integration test queries
    #[allow(dead_code)]
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    pub async fn new(database_path: &str) -> Result<Self> {
        if let Some(parent) = Path::new(database_path).parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let database_url = format!("sqlite:{}?mode=rwc", database_path);
        debug!("Connecting to state database: {}", database_url);
        let pool = SqlitePool::connect(&database_url).await?;

        let store = Self { pool };
        store.initialize_tables().await?;
        info!("State store initialized at {}", database_path);

        Ok(store)
    }

    async fn initialize_tables(&self) -> Result<()> {
        let state_table_sql = r#"
            CREATE TABLE IF NOT EXISTS maintenance_state (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at DATETIME NOT NULL
            )
        "#;
        sqlx::query(state_table_sql).execute(&self.pool).await?;
        Ok(())
    }

    /// Load the persisted state, falling back to defaults on any failure.
    pub async fn load(&self) -> MaintenanceState {
        let row = sqlx::query_scalar::<_, String>(
            "SELECT value FROM maintenance_state WHERE key = ?",
        )
        .bind(STATE_KEY)
        .fetch_optional(&self.pool)
        .await;

        match row {
            Ok(Some(value)) => match serde_json::from_str::<MaintenanceState>(&value) {
                Ok(state) => state,
                Err(e) => {
                    warn!("Persisted maintenance state is malformed, using defaults: {}", e);
                    MaintenanceState::default()
                }
            },
            Ok(None) => {
                debug!("No persisted maintenance state found, using defaults");
                MaintenanceState::default()
            }
            Err(e) => {
                warn!("Failed to read persisted maintenance state, using defaults: {}", e);
                MaintenanceState::default()
            }
        }
    }

    /// Replace the persisted record with the given state.
    pub async fn save(&self, state: &MaintenanceState) -> Result<()> {
        let value = serde_json::to_string(state)?;

        sqlx::query(
            "INSERT OR REPLACE INTO maintenance_state (key, value, updated_at) VALUES (?, ?, ?)",
        )
        .bind(STATE_KEY)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

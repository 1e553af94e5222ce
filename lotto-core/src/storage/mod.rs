pub mod draw_store;
pub mod ticket_store;

pub use draw_store::DrawStore;
pub use ticket_store::TicketStore;

use crate::error::{LedgerError, Result};
use rusqlite::Connection;
use std::path::Path;
use tokio::sync::Mutex;

/// Single-file SQLite store behind an async mutex. The mutex is the
/// serialization point for every ledger operation: a caller holds the
/// guard for the whole check-then-write sequence, so preconditions cannot
/// be invalidated between the check and the write.
pub struct Storage {
    conn: Mutex<Connection>,
}

impl Storage {
    pub async fn new(db_path: &Path) -> Result<Self> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = db_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| LedgerError::internal(format!("Failed to create directory: {}", e)))?;
        }

        let conn = Connection::open(db_path)?;
        let storage = Self {
            conn: Mutex::new(conn),
        };

        storage.init_schema().await?;
        Ok(storage)
    }

    async fn init_schema(&self) -> Result<()> {
        let conn = self.conn.lock().await;

        // Draws table
        conn.execute(
            "CREATE TABLE IF NOT EXISTS draws (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                status TEXT NOT NULL,
                winning_numbers TEXT,
                created_at INTEGER NOT NULL
            )",
            [],
        )?;

        // Tickets table
        conn.execute(
            "CREATE TABLE IF NOT EXISTS tickets (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                draw_id INTEGER NOT NULL,
                numbers TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                FOREIGN KEY (draw_id) REFERENCES draws(id)
            )",
            [],
        )?;

        // Durable backstop for the single-active-draw invariant; the
        // authoritative check happens inside the create transaction.
        conn.execute(
            "CREATE UNIQUE INDEX IF NOT EXISTS idx_draws_one_active
             ON draws(status) WHERE status = 'active'",
            [],
        )?;

        Ok(())
    }

    pub async fn get_connection(&self) -> tokio::sync::MutexGuard<'_, Connection> {
        self.conn.lock().await
    }
}

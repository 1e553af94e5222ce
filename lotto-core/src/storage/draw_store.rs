use crate::error::Result;
use crate::numbers::NumberSet;
use crate::types::{Draw, DrawStatus};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

/// Row-level access to the draws table. Borrows a connection (or a
/// transaction, which derefs to one) so callers control the atomicity
/// scope.
pub struct DrawStore<'a> {
    conn: &'a Connection,
}

impl<'a> DrawStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert a new draw in Active state and return its store-assigned id.
    pub fn insert_active(&self) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO draws (status, created_at) VALUES (?1, ?2)",
            params![DrawStatus::Active.as_str(), Utc::now().timestamp()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn active_exists(&self) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM draws WHERE status = ?1",
            params![DrawStatus::Active.as_str()],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    pub fn find(&self, draw_id: i64) -> Result<Option<Draw>> {
        let draw = self
            .conn
            .query_row(
                "SELECT id, status, winning_numbers, created_at FROM draws WHERE id = ?1",
                params![draw_id],
                |row| {
                    let status_str: String = row.get(1)?;
                    let winning_json: Option<String> = row.get(2)?;
                    let created_timestamp: i64 = row.get(3)?;

                    let status: DrawStatus = status_str.parse().map_err(|_| {
                        rusqlite::Error::InvalidColumnType(
                            1,
                            "status".to_string(),
                            rusqlite::types::Type::Text,
                        )
                    })?;

                    let winning_numbers = winning_json
                        .map(|json| {
                            serde_json::from_str::<NumberSet>(&json).map_err(|_| {
                                rusqlite::Error::InvalidColumnType(
                                    2,
                                    "winning_numbers".to_string(),
                                    rusqlite::types::Type::Text,
                                )
                            })
                        })
                        .transpose()?;

                    Ok(Draw {
                        id: row.get(0)?,
                        status,
                        winning_numbers,
                        created_at: DateTime::from_timestamp(created_timestamp, 0)
                            .unwrap_or_else(Utc::now),
                    })
                },
            )
            .optional()?;

        Ok(draw)
    }

    /// Flip a draw to Closed and persist its winning numbers. The caller
    /// has already verified the draw exists and is Active.
    pub fn close(&self, draw_id: i64, winning: &NumberSet) -> Result<()> {
        let winning_json = serde_json::to_string(winning)?;
        self.conn.execute(
            "UPDATE draws SET status = ?1, winning_numbers = ?2 WHERE id = ?3",
            params![DrawStatus::Closed.as_str(), winning_json, draw_id],
        )?;
        Ok(())
    }
}

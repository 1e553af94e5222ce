use crate::error::Result;
use crate::numbers::NumberSet;
use crate::types::Ticket;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

/// Row-level access to the tickets table.
pub struct TicketStore<'a> {
    conn: &'a Connection,
}

impl<'a> TicketStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert a ticket for a draw. Numbers are already canonical ascending.
    pub fn insert(&self, draw_id: i64, numbers: &NumberSet) -> Result<i64> {
        let numbers_json = serde_json::to_string(numbers)?;
        self.conn.execute(
            "INSERT INTO tickets (draw_id, numbers, created_at) VALUES (?1, ?2, ?3)",
            params![draw_id, numbers_json, Utc::now().timestamp()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// All tickets for a draw, in purchase order.
    pub fn list_for_draw(&self, draw_id: i64) -> Result<Vec<Ticket>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, draw_id, numbers, created_at FROM tickets
             WHERE draw_id = ?1 ORDER BY id ASC",
        )?;

        let ticket_iter = stmt.query_map(params![draw_id], |row| {
            let numbers_json: String = row.get(2)?;
            let created_timestamp: i64 = row.get(3)?;

            let numbers: NumberSet = serde_json::from_str(&numbers_json).map_err(|_| {
                rusqlite::Error::InvalidColumnType(
                    2,
                    "numbers".to_string(),
                    rusqlite::types::Type::Text,
                )
            })?;

            Ok(Ticket {
                id: row.get(0)?,
                draw_id: row.get(1)?,
                numbers,
                created_at: DateTime::from_timestamp(created_timestamp, 0)
                    .unwrap_or_else(Utc::now),
            })
        })?;

        let mut tickets = Vec::new();
        for ticket in ticket_iter {
            tickets.push(ticket?);
        }

        Ok(tickets)
    }
}

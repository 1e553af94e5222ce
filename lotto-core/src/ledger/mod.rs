use crate::error::{LedgerError, Result};
use crate::numbers::NumberSet;
use crate::storage::{DrawStore, Storage, TicketStore};
use crate::types::{Draw, DrawResults, DrawStatus};
use std::path::Path;
use std::sync::Arc;

/// The draw & ticket ledger. Owns the store; every mutating operation runs
/// its whole check-then-write sequence inside one transaction while holding
/// the connection lock, so a failed precondition never leaves a partial
/// write and two calls cannot interleave between check and write.
pub struct DrawLedger {
    storage: Arc<Storage>,
}

impl DrawLedger {
    /// Open (or create) the ledger database at `<data_dir>/lotto.db`.
    pub async fn new(data_dir: &Path) -> Result<Self> {
        let db_path = data_dir.join("lotto.db");
        let storage = Arc::new(Storage::new(&db_path).await?);

        Ok(Self { storage })
    }

    /// Open a new draw. Fails with `Conflict` if any draw is still Active;
    /// nothing is written in that case.
    pub async fn create_draw(&self) -> Result<Draw> {
        let mut conn = self.storage.get_connection().await;
        let tx = conn.transaction()?;

        let draw = {
            let draws = DrawStore::new(&tx);
            if draws.active_exists()? {
                return Err(LedgerError::conflict("active draw already exists"));
            }
            let draw_id = draws.insert_active()?;
            draws
                .find(draw_id)?
                .ok_or_else(|| LedgerError::internal("draw missing right after insert"))?
        };
        tx.commit()?;

        tracing::info!("Opened draw {}", draw.id);
        Ok(draw)
    }

    /// Sell a ticket against an Active draw. Validation happens before any
    /// store access: exactly 5 numbers, all distinct (checked first), each
    /// in [1,36] (checked second). Numbers are persisted in ascending order.
    pub async fn buy_ticket(&self, draw_id: i64, numbers: &[u8]) -> Result<i64> {
        let numbers = NumberSet::new(numbers)?;

        let mut conn = self.storage.get_connection().await;
        let tx = conn.transaction()?;

        let ticket_id = {
            let draws = DrawStore::new(&tx);
            let draw = draws
                .find(draw_id)?
                .ok_or(LedgerError::DrawNotFound { id: draw_id })?;
            if draw.status != DrawStatus::Active {
                return Err(LedgerError::state("draw not active"));
            }
            TicketStore::new(&tx).insert(draw_id, &numbers)?
        };
        tx.commit()?;

        tracing::info!("Sold ticket {} for draw {}", ticket_id, draw_id);
        Ok(ticket_id)
    }

    /// Close an Active draw: sample 5 distinct winning numbers uniformly
    /// without replacement from [1,36], persist them ascending, and flip the
    /// status. Not idempotent: closing an already-closed draw is a
    /// `State` error and leaves the original winning numbers untouched.
    pub async fn close_draw(&self, draw_id: i64) -> Result<Draw> {
        let mut conn = self.storage.get_connection().await;
        let tx = conn.transaction()?;

        let (draw, winning) = {
            let draws = DrawStore::new(&tx);
            let draw = draws
                .find(draw_id)?
                .ok_or(LedgerError::DrawNotFound { id: draw_id })?;
            if draw.status != DrawStatus::Active {
                return Err(LedgerError::state("draw already closed"));
            }

            let winning = NumberSet::random(&mut rand::thread_rng());
            draws.close(draw_id, &winning)?;
            let closed = draws
                .find(draw_id)?
                .ok_or_else(|| LedgerError::internal("draw missing right after close"))?;
            (closed, winning)
        };
        tx.commit()?;

        tracing::info!("Closed draw {} with winning numbers {}", draw.id, winning);
        Ok(draw)
    }

    /// Winning numbers (absent while the draw is still Active) plus every
    /// ticket sold for the draw, in purchase order. Read-only; no win/loss
    /// evaluation is performed here.
    pub async fn get_results(&self, draw_id: i64) -> Result<DrawResults> {
        let conn = self.storage.get_connection().await;

        let draw = DrawStore::new(&conn)
            .find(draw_id)?
            .ok_or(LedgerError::DrawNotFound { id: draw_id })?;
        let tickets = TicketStore::new(&conn).list_for_draw(draw_id)?;

        Ok(DrawResults {
            winning_numbers: draw.winning_numbers,
            tickets,
        })
    }
}

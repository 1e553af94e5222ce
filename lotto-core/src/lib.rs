//! lotto-core - Draw and ticket ledger for a small lottery service
//!
//! One operator-facing round ("draw") is open at a time; participants buy
//! tickets of 5 distinct numbers in [1,36] against it; closing the draw
//! samples the winning numbers. Everything persists in a single SQLite
//! file and each operation runs as one atomic unit of work.

pub mod error;
pub mod ledger;
pub mod numbers;
pub mod storage;
pub mod types;

pub use error::{LedgerError, Result};
pub use ledger::DrawLedger;
pub use numbers::{NumberSet, MAX_NUMBER, MIN_NUMBER, PICK_COUNT};
pub use types::{Draw, DrawResults, DrawStatus, Ticket};

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_draw_creation() {
        let temp_dir = tempdir().unwrap();
        let ledger = DrawLedger::new(temp_dir.path()).await.unwrap();

        let draw = ledger.create_draw().await.unwrap();
        assert_eq!(draw.id, 1);
        assert_eq!(draw.status, DrawStatus::Active);
    }
}

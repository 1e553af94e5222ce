use crate::error::LedgerError;
use crate::numbers::NumberSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a draw. The only transition is Active -> Closed,
/// performed once by `close_draw`; there is no edge back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawStatus {
    Active,
    Closed,
}

impl DrawStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DrawStatus::Active => "active",
            DrawStatus::Closed => "closed",
        }
    }
}

impl FromStr for DrawStatus {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(DrawStatus::Active),
            "closed" => Ok(DrawStatus::Closed),
            other => Err(LedgerError::internal(format!(
                "unknown draw status '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for DrawStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One lottery round. `winning_numbers` is absent while Active and set
/// exactly once when the draw closes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Draw {
    pub id: i64,
    pub status: DrawStatus,
    pub winning_numbers: Option<NumberSet>,
    pub created_at: DateTime<Utc>,
}

/// One participant's pick, bound to a draw. Immutable once sold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub draw_id: i64,
    pub numbers: NumberSet,
    pub created_at: DateTime<Utc>,
}

/// Read-only view returned by `get_results`: the winning numbers (if the
/// draw has closed) plus every ticket sold, in purchase order. Win/loss
/// evaluation is deliberately left to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawResults {
    pub winning_numbers: Option<NumberSet>,
    pub tickets: Vec<Ticket>,
}

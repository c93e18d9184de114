//! Card domain model.
//!
//! # Invariants
//! - A card always owns exactly two sides. On the wire they travel as an
//!   ordered pair where index 0 is `front` and index 1 is `back`.

use crate::model::side::Side;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Two-sided flashcard unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Server-assigned; `None` for cards built locally.
    pub id: Option<String>,
    /// Unix epoch milliseconds.
    pub creation_timestamp: Option<i64>,
    pub front: Side,
    pub back: Side,
}

impl Card {
    /// Creates a local card stamped with the current time.
    pub fn new(front: Side, back: Side) -> Self {
        Self {
            id: None,
            creation_timestamp: Some(now_epoch_ms()),
            front,
            back,
        }
    }

    /// Creates a card whose sides each hold one text concept.
    pub fn from_text_pair(front_text: impl Into<String>, back_text: impl Into<String>) -> Self {
        Self::new(Side::from_text(front_text), Side::from_text(back_text))
    }
}

fn now_epoch_ms() -> i64 {
    // Clock before the epoch only happens on broken hosts; stamp zero there.
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

//! A user's bookmark of a deck.

use crate::model::deck::Deck;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: String,
    pub deck: Deck,
}

impl Favorite {
    pub fn new(id: impl Into<String>, deck: Deck) -> Self {
        Self {
            id: id.into(),
            deck,
        }
    }
}

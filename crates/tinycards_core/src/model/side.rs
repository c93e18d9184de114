//! Side: one face of a card.

use crate::model::concept::Concept;
use crate::model::fact::Fact;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Side {
    pub id: Option<String>,
    /// Ordered as displayed.
    pub concepts: Vec<Concept>,
}

impl Side {
    pub fn new(concepts: Vec<Concept>) -> Self {
        Self { id: None, concepts }
    }

    /// Builds the common single-concept, single-text-fact side.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(vec![Concept::new(Fact::text(text))])
    }

    /// Text of the first concept's fact, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.concepts
            .first()
            .and_then(|concept| concept.fact.text.as_deref())
    }
}

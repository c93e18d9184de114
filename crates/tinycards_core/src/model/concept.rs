//! Concept: one learnable unit wrapping a single fact.

use crate::model::fact::Fact;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    pub id: Option<String>,
    /// Epoch milliseconds, owned by the service.
    pub creation_timestamp: Option<i64>,
    /// Epoch milliseconds, owned by the service.
    pub update_timestamp: Option<i64>,
    pub fact: Fact,
}

impl Concept {
    /// Wraps `fact` in a concept that has not been uploaded yet.
    pub fn new(fact: Fact) -> Self {
        Self {
            id: None,
            creation_timestamp: None,
            update_timestamp: None,
            fact,
        }
    }
}

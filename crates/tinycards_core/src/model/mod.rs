//! Domain model for decks and the listings that reference them.
//!
//! # Responsibility
//! - Define plain data holders for every service entity.
//! - Keep derived values (shareable link, visibility) consistent.
//!
//! # Invariants
//! - Entity graphs are owned trees: Deck -> Card -> Side -> Concept -> Fact.
//! - Nothing in this layer knows about wire key names.

pub mod card;
pub mod concept;
pub mod deck;
pub mod fact;
pub mod favorite;
pub mod side;
pub mod trendable;
pub mod user;

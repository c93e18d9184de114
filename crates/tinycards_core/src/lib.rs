//! Client-side data model and JSON wire converters for the Tinycards
//! flashcard service.
//!
//! Transport, authentication and file formats live with the caller; this
//! crate only maps decoded `serde_json::Value` payloads to model objects and
//! back.

pub mod convert;
pub mod error;
pub mod logging;
pub mod model;

pub use convert::card::{
    card_to_json, concept_to_json, fact_to_json, json_to_card, json_to_concept, json_to_fact,
    json_to_side, side_to_json,
};
pub use convert::case::{camelize, keys_to_camel, keys_to_snake, underscore};
pub use convert::deck::{
    deck_to_json, favorite_to_json, json_to_deck, json_to_favorite, DeckPayloadOptions,
};
pub use convert::generic::{to_json, to_object};
pub use convert::listing::{json_to_searchable, json_to_trendable, trendable_to_json};
pub use convert::user::{json_to_user, user_to_json};
pub use convert::{json_to_decks, json_to_favorites, json_to_searchables, json_to_trendables};
pub use error::{ConvertError, ConvertResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::card::Card;
pub use model::concept::Concept;
pub use model::deck::{Deck, Visibility};
pub use model::fact::Fact;
pub use model::favorite::Favorite;
pub use model::side::Side;
pub use model::trendable::{SearchableData, Trendable, TrendableData, TrendablePayload};
pub use model::user::User;

/// Returns the crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

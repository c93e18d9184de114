//! JSON <-> model converters.
//!
//! # Responsibility
//! - Translate wire key names (lowerCamelCase) to model fields (snake_case).
//! - Map nested wire shapes to the owned model tree and back.
//!
//! # Invariants
//! - Converters never mutate their input and never return partial objects.
//! - A required key that is absent fails with `MissingField(<wire name>)`.
//! - Write shapes omit server-owned identity unless the service expects it.

pub mod card;
pub mod case;
pub mod deck;
mod fields;
pub mod generic;
pub mod listing;
pub mod user;

use crate::error::{ConvertError, ConvertResult};
use crate::model::deck::Deck;
use crate::model::favorite::Favorite;
use crate::model::trendable::Trendable;
use log::debug;
use serde_json::Value;

/// Reads an array of decks, failing on the first malformed element.
pub fn json_to_decks(json: &Value) -> ConvertResult<Vec<Deck>> {
    decode_list(json, "decks", deck::json_to_deck)
}

pub fn json_to_favorites(json: &Value) -> ConvertResult<Vec<Favorite>> {
    decode_list(json, "favorites", deck::json_to_favorite)
}

pub fn json_to_trendables(json: &Value) -> ConvertResult<Vec<Trendable>> {
    decode_list(json, "trendables", listing::json_to_trendable)
}

pub fn json_to_searchables(json: &Value) -> ConvertResult<Vec<Trendable>> {
    decode_list(json, "searchables", listing::json_to_searchable)
}

fn decode_list<T>(
    json: &Value,
    kind: &'static str,
    convert: fn(&Value) -> ConvertResult<T>,
) -> ConvertResult<Vec<T>> {
    let items = json
        .as_array()
        .ok_or_else(|| ConvertError::mismatch(kind, "an array"))?;
    let decoded = items.iter().map(convert).collect::<ConvertResult<Vec<_>>>()?;
    debug!(
        "event=list_decoded module=convert status=ok kind={} count={}",
        kind,
        decoded.len()
    );
    Ok(decoded)
}

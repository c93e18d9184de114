//! Deck and favorite converters.
//!
//! # Responsibility
//! - Read decks from detail and listing responses.
//! - Build the deck upload payload, including the placeholder fields the
//!   service schema requires.
//!
//! # Invariants
//! - Placeholder fields carry no domain meaning and are never read back.
//! - `fromLanguage` is always `"en"`.

use crate::convert::card::{card_to_json, json_to_card};
use crate::convert::fields::{
    as_object, nullable_str, require, require_array, require_id, require_str, require_truthy,
};
use crate::error::ConvertResult;
use crate::model::deck::{Deck, Visibility};
use crate::model::favorite::Favorite;
use log::{debug, warn};
use serde::Deserialize;
use serde_json::{json, Value};

/// Source language the upload endpoint expects regardless of deck content.
pub const DEFAULT_FROM_LANGUAGE: &str = "en";

/// Shape choices for the deck upload payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeckPayloadOptions {
    /// Send `cards` as one JSON text string instead of an array. Some
    /// service modes (multipart form uploads) accept cards only as a blob.
    pub cards_as_string: bool,
}

/// Reads a deck.
///
/// `cards` is optional (listing endpoints omit it); every other consumed key
/// is required. `description` and `imageUrl` may be `null`.
pub fn json_to_deck(json: &Value) -> ConvertResult<Deck> {
    let object = as_object(json, "deck")?;
    let private = require_truthy(object, "private")?;
    let shareable = require_truthy(object, "shareable")?;
    let visibility = Visibility::from_flags(private, shareable).unwrap_or_else(|_| {
        warn!(
            "event=deck_visibility_normalized module=convert status=warn private={} shareable={} normalized={}",
            private,
            shareable,
            Visibility::Public.as_str()
        );
        Visibility::Public
    });

    let cards = match object.get("cards") {
        Some(Value::Null) | None => Vec::new(),
        Some(_) => require_array(object, "cards")?
            .iter()
            .map(json_to_card)
            .collect::<ConvertResult<Vec<_>>>()?,
    };

    let deck = Deck {
        id: Some(require_id(object, "id")?),
        slug: require_str(object, "slug")?,
        compact_id: require_str(object, "compactId")?,
        title: require_str(object, "name")?,
        description: nullable_str(object, "description")?,
        cover: nullable_str(object, "imageUrl")?,
        cards,
        visibility,
        front_language: None,
        back_language: None,
    };
    debug!(
        "event=deck_decoded module=convert status=ok cards={} visibility={}",
        deck.cards.len(),
        deck.visibility.as_str()
    );
    Ok(deck)
}

/// Builds the deck upload payload.
///
/// # Errors
/// - `Json` when `cards_as_string` is set and the cards array cannot be
///   rendered to text.
pub fn deck_to_json(deck: &Deck, options: &DeckPayloadOptions) -> ConvertResult<Value> {
    let cards = Value::Array(deck.cards.iter().map(card_to_json).collect());
    let cards = if options.cards_as_string {
        Value::String(serde_json::to_string(&cards)?)
    } else {
        cards
    };

    debug!(
        "event=deck_encoded module=convert status=ok cards={} cards_as_string={}",
        deck.cards.len(),
        options.cards_as_string
    );
    Ok(json!({
        "name": deck.title,
        "description": deck.description,
        "private": deck.is_private(),
        "shareable": deck.is_shareable(),
        "cards": cards,
        "ttsLanguages": [],
        "blacklistedSideIndices": [],
        "blacklistedQuestionTypes": [],
        "gradingModes": [],
        "fromLanguage": DEFAULT_FROM_LANGUAGE,
        "imageFile": deck.cover,
    }))
}

pub fn json_to_favorite(json: &Value) -> ConvertResult<Favorite> {
    let object = as_object(json, "favorite")?;
    Ok(Favorite {
        id: require_id(object, "id")?,
        deck: json_to_deck(require(object, "deck")?)?,
    })
}

/// Writes `{id, deck}` with the deck in its default upload shape.
pub fn favorite_to_json(favorite: &Favorite) -> ConvertResult<Value> {
    Ok(json!({
        "id": favorite.id,
        "deck": deck_to_json(&favorite.deck, &DeckPayloadOptions::default())?,
    }))
}

#[cfg(test)]
mod tests {
    use super::{deck_to_json, json_to_deck, DeckPayloadOptions};
    use crate::model::deck::{Deck, Visibility};
    use serde_json::json;

    fn listing_deck() -> serde_json::Value {
        json!({
            "id": "d-1",
            "name": "Spanish",
            "description": null,
            "compactId": "abc",
            "slug": "spanish",
            "imageUrl": null,
            "private": 1,
            "shareable": "yes"
        })
    }

    #[test]
    fn missing_cards_defaults_to_empty() {
        let deck = json_to_deck(&listing_deck()).unwrap();
        assert!(deck.cards.is_empty());
        assert_eq!(deck.description, None);
        assert_eq!(deck.visibility, Visibility::Shareable);
    }

    #[test]
    fn public_but_shareable_is_normalized_to_public() {
        let mut value = listing_deck();
        value["private"] = json!(false);
        value["shareable"] = json!(true);

        let deck = json_to_deck(&value).unwrap();
        assert_eq!(deck.visibility, Visibility::Public);
        assert_eq!(deck.shareable_link(), "");
    }

    #[test]
    fn options_deserialize_from_camel_case_config() {
        let options: DeckPayloadOptions =
            serde_json::from_value(json!({"cardsAsString": true})).unwrap();
        assert!(options.cards_as_string);
        let defaults: DeckPayloadOptions = serde_json::from_value(json!({})).unwrap();
        assert_eq!(defaults, DeckPayloadOptions::default());
    }

    #[test]
    fn cards_as_string_renders_cards_to_json_text() {
        let mut deck = Deck::new("Blob");
        deck.add_card(("uno", "one"));

        let options = DeckPayloadOptions {
            cards_as_string: true,
        };
        let payload = deck_to_json(&deck, &options).unwrap();
        let text = payload["cards"].as_str().unwrap_or_default();
        let parsed: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(parsed[0]["sides"][0]["concepts"][0]["fact"]["text"], "uno");
    }
}

//! Card subtree converters: fact, concept, side, card.
//!
//! # Invariants
//! - Reads require server-owned identity (`id`, timestamps); writes never
//!   send it back.
//! - `sides[0]` is the front and `sides[1]` the back in both directions.

use crate::convert::fields::{
    as_object, optional_str, optional_timestamp, require, require_array, require_id,
    require_str, require_timestamp,
};
use crate::error::{ConvertError, ConvertResult};
use crate::model::card::Card;
use crate::model::concept::Concept;
use crate::model::fact::Fact;
use crate::model::side::Side;
use serde_json::{json, Value};

/// Reads a fact. `id` and `type` are required; media fields are optional.
pub fn json_to_fact(json: &Value) -> ConvertResult<Fact> {
    let object = as_object(json, "fact")?;
    Ok(Fact {
        id: Some(require_id(object, "id")?),
        kind: require_str(object, "type")?,
        text: optional_str(object, "text")?,
        image_url: optional_str(object, "imageUrl")?,
        tts_url: optional_str(object, "ttsUrl")?,
    })
}

/// Writes a fact as `{text, type}`.
pub fn fact_to_json(fact: &Fact) -> Value {
    json!({
        "text": fact.text,
        "type": fact.kind,
    })
}

pub fn json_to_concept(json: &Value) -> ConvertResult<Concept> {
    let object = as_object(json, "concept")?;
    Ok(Concept {
        fact: json_to_fact(require(object, "fact")?)?,
        id: Some(require_id(object, "id")?),
        creation_timestamp: Some(require_timestamp(object, "createdAt")?),
        update_timestamp: Some(require_timestamp(object, "updatedAt")?),
    })
}

/// Writes only the nested fact; id and timestamps belong to the service.
pub fn concept_to_json(concept: &Concept) -> Value {
    json!({ "fact": fact_to_json(&concept.fact) })
}

pub fn json_to_side(json: &Value) -> ConvertResult<Side> {
    let object = as_object(json, "side")?;
    let concepts = require_array(object, "concepts")?
        .iter()
        .map(json_to_concept)
        .collect::<ConvertResult<Vec<_>>>()?;
    Ok(Side {
        id: Some(require_id(object, "id")?),
        concepts,
    })
}

pub fn side_to_json(side: &Side) -> Value {
    json!({
        "concepts": side.concepts.iter().map(concept_to_json).collect::<Vec<_>>(),
    })
}

/// Reads a card from `{id, sides: [front, back, ..], creationTimestamp?}`.
///
/// # Errors
/// - `MissingField("sides")` / `MissingField("id")` when absent.
/// - `StructuralMismatch` when `sides` has fewer than two entries.
pub fn json_to_card(json: &Value) -> ConvertResult<Card> {
    let object = as_object(json, "card")?;
    let sides = require_array(object, "sides")?;
    let (front, back) = match sides.as_slice() {
        [front, back, ..] => (json_to_side(front)?, json_to_side(back)?),
        _ => {
            return Err(ConvertError::mismatch(
                "sides",
                "an array with a front and a back side",
            ))
        }
    };
    Ok(Card {
        id: Some(require_id(object, "id")?),
        creation_timestamp: optional_timestamp(object, "creationTimestamp")?,
        front,
        back,
    })
}

/// Writes `{creationTimestamp, sides: [front, back]}`; the id is omitted.
pub fn card_to_json(card: &Card) -> Value {
    json!({
        "creationTimestamp": card.creation_timestamp,
        "sides": [side_to_json(&card.front), side_to_json(&card.back)],
    })
}

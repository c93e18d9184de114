//! Listing envelope converters: trending decks and search hits.

use crate::convert::fields::{
    as_object, nullable_str, optional_f64, optional_str, require, require_array, require_id,
    require_number, require_str, require_truthy, require_u64, truthy, Object,
};
use crate::error::{ConvertError, ConvertResult};
use crate::model::trendable::{SearchableData, Trendable, TrendableData, TrendablePayload};
use serde_json::{Map, Value};

/// Reads a trending-deck envelope.
///
/// # Errors
/// - `MissingField("data")` when `data` is absent or empty.
/// - `MissingField` for any absent payload attribute except `fullname`.
///
/// `enabled`, `private` and `shareable` are coerced like deck flags.
pub fn json_to_trendable(json: &Value) -> ConvertResult<Trendable> {
    let object = as_object(json, "trendable")?;
    let data = payload(object)?;
    let data = TrendableData {
        blacklisted_question_types: array(data, "blacklistedQuestionTypes")?,
        blacklisted_side_indices: array(data, "blacklistedSideIndices")?,
        card_count: require_u64(data, "cardCount")?,
        compact_id: require_str(data, "compactId")?,
        cover_image_url: nullable_str(data, "coverImageUrl")?,
        created_at: require_number(data, "createdAt")?,
        deck_groups: array(data, "deckGroups")?,
        description: nullable_str(data, "description")?,
        enabled: require_truthy(data, "enabled")?,
        favorite_count: require_u64(data, "favoriteCount")?,
        from_language: require_str(data, "fromLanguage")?,
        fullname: optional_str(data, "fullname")?,
        grading_modes: array(data, "gradingModes")?,
        hashes: require(data, "hashes")?.clone(),
        id: require_id(data, "id")?,
        image_url: nullable_str(data, "imageUrl")?,
        name: require_str(data, "name")?,
        picture: nullable_str(data, "picture")?,
        private: require_truthy(data, "private")?,
        shareable: require_truthy(data, "shareable")?,
        slug: require_str(data, "slug")?,
        tag_ids: array(data, "tagIds")?,
        tts_languages: array(data, "ttsLanguages")?,
        ui_language: require_str(data, "uiLanguage")?,
        updated_at: require_number(data, "updatedAt")?,
        user_id: require_id(data, "userId")?,
        username: require_str(data, "username")?,
    };

    Ok(Trendable {
        id: require_id(object, "id")?,
        kind: require_str(object, "type")?,
        data: TrendablePayload::Trendable(Box::new(data)),
    })
}

/// Writes a trending-deck envelope with every payload key.
///
/// `fullname` is omitted when unset.
///
/// # Errors
/// - `InvalidArgument` for search-hit payloads, which are read-only.
pub fn trendable_to_json(trendable: &Trendable) -> ConvertResult<Value> {
    let data = trendable.trendable_data().ok_or_else(|| {
        ConvertError::InvalidArgument("search results cannot be written back".to_string())
    })?;

    let mut out = Map::new();
    let mut put = |key: &str, value: Value| {
        out.insert(key.to_string(), value);
    };
    put("blacklistedQuestionTypes", Value::from(data.blacklisted_question_types.clone()));
    put("blacklistedSideIndices", Value::from(data.blacklisted_side_indices.clone()));
    put("cardCount", Value::from(data.card_count));
    put("compactId", Value::from(data.compact_id.clone()));
    put("coverImageUrl", Value::from(data.cover_image_url.clone()));
    put("createdAt", Value::Number(data.created_at.clone()));
    put("deckGroups", Value::from(data.deck_groups.clone()));
    put("description", Value::from(data.description.clone()));
    put("enabled", Value::from(data.enabled));
    put("favoriteCount", Value::from(data.favorite_count));
    put("fromLanguage", Value::from(data.from_language.clone()));
    if let Some(fullname) = &data.fullname {
        put("fullname", Value::from(fullname.clone()));
    }
    put("gradingModes", Value::from(data.grading_modes.clone()));
    put("hashes", data.hashes.clone());
    put("id", Value::from(data.id.clone()));
    put("imageUrl", Value::from(data.image_url.clone()));
    put("name", Value::from(data.name.clone()));
    put("picture", Value::from(data.picture.clone()));
    put("private", Value::from(data.private));
    put("shareable", Value::from(data.shareable));
    put("slug", Value::from(data.slug.clone()));
    put("tagIds", Value::from(data.tag_ids.clone()));
    put("ttsLanguages", Value::from(data.tts_languages.clone()));
    put("uiLanguage", Value::from(data.ui_language.clone()));
    put("updatedAt", Value::Number(data.updated_at.clone()));
    put("userId", Value::from(data.user_id.clone()));
    put("username", Value::from(data.username.clone()));

    let mut envelope = Map::new();
    envelope.insert("id".to_string(), Value::from(trendable.id.clone()));
    envelope.insert("type".to_string(), Value::from(trendable.kind.clone()));
    envelope.insert("data".to_string(), Value::Object(out));
    Ok(Value::Object(envelope))
}

/// Reads a search-hit envelope. Search hits are read-only.
pub fn json_to_searchable(json: &Value) -> ConvertResult<Trendable> {
    let object = as_object(json, "searchable")?;
    let data = payload(object)?;
    let data = SearchableData {
        id: require_id(data, "id")?,
        name: require_str(data, "name")?,
        description: nullable_str(data, "description")?,
        average_freshness: optional_f64(data, "averageFreshness")?,
    };

    Ok(Trendable {
        id: require_id(object, "id")?,
        kind: require_str(object, "type")?,
        data: TrendablePayload::Searchable(data),
    })
}

/// Non-empty `data` object of a listing envelope.
fn payload(object: &Object) -> ConvertResult<&Object> {
    match object.get("data") {
        Some(data) if truthy(data) => as_object(data, "data"),
        _ => Err(ConvertError::missing("data")),
    }
}

fn array(object: &Object, key: &str) -> ConvertResult<Vec<Value>> {
    require_array(object, key).cloned()
}

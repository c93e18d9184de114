//! Generic converters for flat entities.
//!
//! Flat entities are those whose wire shape is their field set with keys
//! renamed; structured entities use the explicit converters in
//! `convert::card`, `convert::deck` and `convert::listing`.

use crate::convert::case::{camelize, keys_to_camel, keys_to_snake};
use crate::error::{ConvertError, ConvertResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Builds `T` from a wire object whose keys are lowerCamelCase.
///
/// The input is not modified.
///
/// # Errors
/// - `MissingField` (wire name) when serde reports a missing field.
/// - `StructuralMismatch` when `json` is not an object.
/// - `Json` for every other serde failure.
pub fn to_object<T: DeserializeOwned>(json: &Value) -> ConvertResult<T> {
    if !json.is_object() {
        return Err(ConvertError::mismatch("<root>", "an object"));
    }
    serde_json::from_value(keys_to_snake(json)).map_err(|err| {
        match missing_field_name(&err) {
            Some(field) => ConvertError::missing(camelize(&field)),
            None => ConvertError::Json(err),
        }
    })
}

/// Serializes `object` and renames its top-level keys to lowerCamelCase.
pub fn to_json<T: Serialize>(object: &T) -> ConvertResult<Value> {
    let value = serde_json::to_value(object)?;
    Ok(keys_to_camel(&value))
}

fn missing_field_name(err: &serde_json::Error) -> Option<String> {
    if !err.is_data() {
        return None;
    }
    // serde derive reports: missing field `name`
    let message = err.to_string();
    let rest = message.strip_prefix("missing field `")?;
    let end = rest.find('`')?;
    Some(rest[..end].to_string())
}

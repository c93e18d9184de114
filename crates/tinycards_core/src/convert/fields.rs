//! Typed readers over decoded JSON objects.
//!
//! Every reader takes the wire key name so failures carry it verbatim.
//! "Required" means the key must be present; whether `null` is accepted is
//! part of each reader's name (`nullable_*`, `optional_*`).

use crate::error::{ConvertError, ConvertResult};
use serde_json::{Map, Number, Value};

pub(crate) type Object = Map<String, Value>;

pub(crate) fn as_object<'a>(value: &'a Value, field: &str) -> ConvertResult<&'a Object> {
    value
        .as_object()
        .ok_or_else(|| ConvertError::mismatch(field, "an object"))
}

pub(crate) fn require<'a>(object: &'a Object, key: &str) -> ConvertResult<&'a Value> {
    object.get(key).ok_or_else(|| ConvertError::missing(key))
}

/// Present and non-null, or `None`.
fn present<'a>(object: &'a Object, key: &str) -> Option<&'a Value> {
    object.get(key).filter(|value| !value.is_null())
}

pub(crate) fn require_array<'a>(object: &'a Object, key: &str) -> ConvertResult<&'a Vec<Value>> {
    require(object, key)?
        .as_array()
        .ok_or_else(|| ConvertError::mismatch(key, "an array"))
}

pub(crate) fn require_str(object: &Object, key: &str) -> ConvertResult<String> {
    require(object, key)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ConvertError::mismatch(key, "a string"))
}

/// Key must be present; `null` maps to `None`.
pub(crate) fn nullable_str(object: &Object, key: &str) -> ConvertResult<Option<String>> {
    require(object, key)?;
    optional_str(object, key)
}

pub(crate) fn optional_str(object: &Object, key: &str) -> ConvertResult<Option<String>> {
    match present(object, key) {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .map(|text| Some(text.to_string()))
            .ok_or_else(|| ConvertError::mismatch(key, "a string")),
    }
}

/// Identifier that the service sends either as a string or as an integer.
pub(crate) fn require_id(object: &Object, key: &str) -> ConvertResult<String> {
    match require(object, key)? {
        Value::String(id) => Ok(id.clone()),
        Value::Number(number) if number.is_i64() || number.is_u64() => Ok(number.to_string()),
        _ => Err(ConvertError::mismatch(key, "a string or integer id")),
    }
}

pub(crate) fn require_i64(object: &Object, key: &str) -> ConvertResult<i64> {
    require(object, key)?
        .as_i64()
        .ok_or_else(|| ConvertError::mismatch(key, "an integer"))
}

pub(crate) fn require_u64(object: &Object, key: &str) -> ConvertResult<u64> {
    require(object, key)?
        .as_u64()
        .ok_or_else(|| ConvertError::mismatch(key, "a non-negative integer"))
}

/// Number kept as sent, so integers are written back as integers.
pub(crate) fn require_number(object: &Object, key: &str) -> ConvertResult<Number> {
    match require(object, key)? {
        Value::Number(number) => Ok(number.clone()),
        _ => Err(ConvertError::mismatch(key, "a number")),
    }
}

pub(crate) fn optional_f64(object: &Object, key: &str) -> ConvertResult<Option<f64>> {
    match present(object, key) {
        None => Ok(None),
        Some(value) => value
            .as_f64()
            .map(Some)
            .ok_or_else(|| ConvertError::mismatch(key, "a number")),
    }
}

/// Epoch timestamp sent as integer or float; fractions are truncated toward
/// zero and floats outside the `i64` range are rejected.
pub(crate) fn require_timestamp(object: &Object, key: &str) -> ConvertResult<i64> {
    timestamp(require(object, key)?, key)
}

pub(crate) fn optional_timestamp(object: &Object, key: &str) -> ConvertResult<Option<i64>> {
    present(object, key)
        .map(|value| timestamp(value, key))
        .transpose()
}

fn timestamp(value: &Value, key: &str) -> ConvertResult<i64> {
    value
        .as_i64()
        .or_else(|| {
            value
                .as_f64()
                .filter(|float| (i64::MIN as f64..i64::MAX as f64).contains(float))
                .map(|float| float.trunc() as i64)
        })
        .ok_or_else(|| ConvertError::mismatch(key, "a timestamp"))
}

pub(crate) fn require_bool(object: &Object, key: &str) -> ConvertResult<bool> {
    require(object, key)?
        .as_bool()
        .ok_or_else(|| ConvertError::mismatch(key, "a boolean"))
}

/// Required flag coerced to boolean the way the service's loose flags read.
pub(crate) fn require_truthy(object: &Object, key: &str) -> ConvertResult<bool> {
    require(object, key).map(truthy)
}

/// `null`, `false`, `0`, `""`, `[]` and `{}` are false; everything else true.
pub(crate) fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

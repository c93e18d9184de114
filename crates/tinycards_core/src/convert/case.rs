//! Key naming convention transforms.
//!
//! The service speaks lowerCamelCase (`subscriberCount`); the model speaks
//! snake_case (`subscriber_count`). Both transforms are pure and shared by
//! every converter.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::{Map, Value};

static CAMEL_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|_)(.)").expect("valid camelize regex"));
static ACRONYM_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").expect("valid acronym regex"));
static WORD_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z\d])([A-Z])").expect("valid word boundary regex"));

/// Converts `snake_case` to `lowerCamelCase`.
pub fn camelize(value: &str) -> String {
    let upper = CAMEL_BOUNDARY.replace_all(value, |caps: &Captures<'_>| caps[1].to_uppercase());
    let mut chars = upper.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Converts `lowerCamelCase` (or `CamelCase`, or kebab-case) to `snake_case`.
pub fn underscore(value: &str) -> String {
    let split = ACRONYM_BOUNDARY.replace_all(value, "${1}_${2}");
    let split = WORD_BOUNDARY.replace_all(&split, "${1}_${2}");
    split.replace('-', "_").to_lowercase()
}

/// Returns a copy of `value` with top-level object keys camelized.
///
/// Non-object values are returned unchanged.
pub fn keys_to_camel(value: &Value) -> Value {
    rename_keys(value, camelize)
}

/// Returns a copy of `value` with top-level object keys underscored.
///
/// Non-object values are returned unchanged.
pub fn keys_to_snake(value: &Value) -> Value {
    rename_keys(value, underscore)
}

fn rename_keys(value: &Value, rename: fn(&str) -> String) -> Value {
    match value {
        Value::Object(object) => Value::Object(
            object
                .iter()
                .map(|(key, field)| (rename(key), field.clone()))
                .collect::<Map<String, Value>>(),
        ),
        other => other.clone(),
    }
}

//! Fact: the atomic content shown on a card side.

use serde::{Deserialize, Serialize};

/// Wire value of `type` for plain text facts.
pub const FACT_KIND_TEXT: &str = "TEXT";

/// Atomic text/image/audio reference shown on a side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    /// Server-assigned; `None` until the fact has been uploaded.
    pub id: Option<String>,
    /// Serialized as `type` to match the service schema.
    #[serde(rename = "type")]
    pub kind: String,
    pub text: Option<String>,
    pub image_url: Option<String>,
    pub tts_url: Option<String>,
}

impl Fact {
    /// Creates a local text fact without server identity.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            id: None,
            kind: FACT_KIND_TEXT.to_string(),
            text: Some(text.into()),
            image_url: None,
            tts_url: None,
        }
    }
}

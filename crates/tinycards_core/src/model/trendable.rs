//! Listing payloads: trending decks and search hits.
//!
//! Both listing endpoints share one outer envelope (`id`, `type`, `data`)
//! and differ only in the payload carried under `data`.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Trending-deck metadata, one field per service attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendableData {
    pub blacklisted_question_types: Vec<Value>,
    pub blacklisted_side_indices: Vec<Value>,
    pub card_count: u64,
    pub compact_id: String,
    pub cover_image_url: Option<String>,
    /// Epoch timestamp, kept as the service sent it (integer or float).
    pub created_at: Number,
    pub deck_groups: Vec<Value>,
    pub description: Option<String>,
    pub enabled: bool,
    pub favorite_count: u64,
    pub from_language: String,
    /// Only present for users who set a display name.
    pub fullname: Option<String>,
    pub grading_modes: Vec<Value>,
    pub hashes: Value,
    pub id: String,
    pub image_url: Option<String>,
    pub name: String,
    pub picture: Option<String>,
    pub private: bool,
    pub shareable: bool,
    pub slug: String,
    pub tag_ids: Vec<Value>,
    pub tts_languages: Vec<Value>,
    pub ui_language: String,
    pub updated_at: Number,
    pub user_id: String,
    pub username: String,
}

/// Search hit payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchableData {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub average_freshness: Option<f64>,
}

/// Payload carried by a listing envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrendablePayload {
    Trendable(Box<TrendableData>),
    Searchable(SearchableData),
}

/// Listing envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trendable {
    pub id: String,
    /// Serialized as `type`; the service uses values such as `DECK`.
    #[serde(rename = "type")]
    pub kind: String,
    pub data: TrendablePayload,
}

impl Trendable {
    /// Trending payload, or `None` for search hits.
    pub fn trendable_data(&self) -> Option<&TrendableData> {
        match &self.data {
            TrendablePayload::Trendable(data) => Some(data),
            TrendablePayload::Searchable(_) => None,
        }
    }

    /// Search payload, or `None` for trending entries.
    pub fn searchable_data(&self) -> Option<&SearchableData> {
        match &self.data {
            TrendablePayload::Searchable(data) => Some(data),
            TrendablePayload::Trendable(_) => None,
        }
    }
}

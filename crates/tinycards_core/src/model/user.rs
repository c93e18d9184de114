//! User profile as returned by the service.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    /// Unix epoch seconds.
    pub creation_date: i64,
    pub email: String,
    pub fullname: String,
    pub learning_language: String,
    pub picture_url: String,
    pub subscribed: bool,
    pub subscriber_count: u64,
    pub subscription_count: u64,
    pub ui_language: String,
    pub username: String,
}

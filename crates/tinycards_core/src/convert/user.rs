//! User profile converter.
//!
//! The profile is almost flat, but the service calls the avatar `picture`
//! while the model calls it `picture_url`, so the mapping is explicit.

use crate::convert::fields::{as_object, require_bool, require_i64, require_str, require_u64};
use crate::error::ConvertResult;
use crate::model::user::User;
use serde_json::{json, Value};

pub fn json_to_user(json: &Value) -> ConvertResult<User> {
    let object = as_object(json, "user")?;
    Ok(User {
        id: require_i64(object, "id")?,
        creation_date: require_i64(object, "creationDate")?,
        email: require_str(object, "email")?,
        fullname: require_str(object, "fullname")?,
        learning_language: require_str(object, "learningLanguage")?,
        picture_url: require_str(object, "picture")?,
        subscribed: require_bool(object, "subscribed")?,
        subscriber_count: require_u64(object, "subscriberCount")?,
        subscription_count: require_u64(object, "subscriptionCount")?,
        ui_language: require_str(object, "uiLanguage")?,
        username: require_str(object, "username")?,
    })
}

pub fn user_to_json(user: &User) -> Value {
    json!({
        "id": user.id,
        "creationDate": user.creation_date,
        "email": user.email,
        "fullname": user.fullname,
        "learningLanguage": user.learning_language,
        "picture": user.picture_url,
        "subscribed": user.subscribed,
        "subscriberCount": user.subscriber_count,
        "subscriptionCount": user.subscription_count,
        "uiLanguage": user.ui_language,
        "username": user.username,
    })
}

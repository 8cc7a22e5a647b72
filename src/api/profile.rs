//! Profile Endpoints
//!
//! The signed-in user's own account. Profile payloads are returned as raw
//! JSON so the session layer can persist them untouched.

use serde::Serialize;
use serde_json::Value;

use super::client::{self, Verb};
use super::ApiResult;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PasswordForm {
    pub current_password: String,
    pub password: String,
    pub password_confirmation: String,
}

pub async fn get_profile(token: &str) -> ApiResult<Value> {
    client::get("profile", Some(token)).await?.into_data()
}

/// Returns the updated profile
pub async fn update_profile(token: &str, form: &ProfileForm) -> ApiResult<Value> {
    client::send(Verb::Put, "profile", Some(token), form).await?.into_data()
}

pub async fn change_password(token: &str, form: &PasswordForm) -> ApiResult<String> {
    let env = client::send::<_, Value>(Verb::Put, "profile/password", Some(token), form).await?;
    Ok(env.message_or("Password changed"))
}

pub async fn delete_account(token: &str) -> ApiResult<String> {
    let env = client::call::<Value>(Verb::Delete, "profile", Some(token), None).await?;
    Ok(env.message_or("Account deleted"))
}

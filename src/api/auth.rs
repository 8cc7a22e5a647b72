//! Auth Endpoints
//!
//! Login, registration and password reset. Login and register both answer
//! with a bearer token plus the user profile.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::client::{self, Verb};
use super::ApiResult;
use crate::models::User;

// ========================
// Argument Structs
// ========================

#[derive(Debug, Clone, Default, Serialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub password_confirmation: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ResetPasswordForm {
    pub email: String,
    pub token: String,
    pub password: String,
    pub password_confirmation: String,
}

#[derive(Serialize)]
struct EmailArgs<'a> {
    email: &'a str,
}

/// Successful login/register payload. `user` stays raw JSON so it can be
/// persisted exactly as the API sent it.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthPayload {
    pub token: String,
    #[serde(default)]
    pub user: Value,
}

impl AuthPayload {
    pub fn user(&self) -> Option<User> {
        serde_json::from_value(self.user.clone()).ok()
    }
}

// ========================
// Commands
// ========================

pub async fn login(form: &LoginForm) -> ApiResult<AuthPayload> {
    client::send(Verb::Post, "login", None, form).await?.into_data()
}

pub async fn register(form: &RegisterForm) -> ApiResult<AuthPayload> {
    client::send(Verb::Post, "register", None, form).await?.into_data()
}

/// Ask the API to mail a reset link; returns its message
pub async fn forgot_password(email: &str) -> ApiResult<String> {
    let env = client::send::<_, Value>(Verb::Post, "forgot-password", None, &EmailArgs { email }).await?;
    Ok(env.message_or("Check your inbox for a reset link"))
}

pub async fn reset_password(form: &ResetPasswordForm) -> ApiResult<String> {
    let env = client::send::<_, Value>(Verb::Post, "reset-password", None, form).await?;
    Ok(env.message_or("Password updated"))
}

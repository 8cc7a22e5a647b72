//! Site Content Endpoints
//!
//! Settings, lookup lists and the contact form.

use serde::Serialize;
use serde_json::Value;

use super::client::{self, Verb};
use super::ApiResult;
use crate::models::{City, Faq, Service, Settings, Stats};

#[derive(Debug, Clone, Default, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

pub async fn get_settings() -> ApiResult<Settings> {
    client::get("settings", None).await?.into_data()
}

pub async fn list_cities() -> ApiResult<Vec<City>> {
    Ok(client::get::<Vec<City>>("cities", None).await?.into_page().items)
}

pub async fn list_faqs() -> ApiResult<Vec<Faq>> {
    Ok(client::get::<Vec<Faq>>("faqs", None).await?.into_page().items)
}

pub async fn get_stats() -> ApiResult<Stats> {
    client::get("stats", None).await?.into_data()
}

pub async fn list_services() -> ApiResult<Vec<Service>> {
    Ok(client::get::<Vec<Service>>("services", None).await?.into_page().items)
}

/// Returns the server's confirmation message
pub async fn send_contact(form: &ContactForm) -> ApiResult<String> {
    let env = client::send::<_, Value>(Verb::Post, "contact", None, form).await?;
    Ok(env.message_or("Message sent"))
}

//! Testimonial Endpoints

use serde::Serialize;
use serde_json::Value;

use super::client::{self, Verb};
use super::ApiResult;
use crate::models::Testimonial;

#[derive(Debug, Clone, Default, Serialize)]
pub struct TestimonialForm {
    pub content: String,
    pub rating: u8,
}

pub async fn list_testimonials() -> ApiResult<Vec<Testimonial>> {
    Ok(client::get::<Vec<Testimonial>>("testimonials", None).await?.into_page().items)
}

/// Testimonials are moderated, so the new entry is not echoed back
pub async fn create_testimonial(token: &str, form: &TestimonialForm) -> ApiResult<String> {
    let env = client::send::<_, Value>(Verb::Post, "testimonials", Some(token), form).await?;
    Ok(env.message_or("Thanks! Your testimonial is awaiting review"))
}

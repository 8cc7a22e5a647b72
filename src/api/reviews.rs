//! Review Endpoints

use serde::Serialize;
use serde_json::Value;

use super::client::{self, Verb};
use super::ApiResult;
use crate::models::Review;

#[derive(Debug, Clone, Serialize)]
pub struct ReviewForm {
    pub rating: u8,
    pub comment: String,
}

pub async fn unit_reviews(unit_id: u64) -> ApiResult<Vec<Review>> {
    Ok(client::get::<Vec<Review>>(&format!("units/{unit_id}/reviews"), None)
        .await?
        .into_page()
        .items)
}

pub async fn create_review(token: &str, unit_id: u64, form: &ReviewForm) -> ApiResult<String> {
    let env = client::send::<_, Value>(Verb::Post, &format!("units/{unit_id}/reviews"), Some(token), form).await?;
    Ok(env.message_or("Thanks for your review"))
}

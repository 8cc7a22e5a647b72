//! Booking Endpoints
//!
//! Viewing appointments. All calls require a token.

use serde::Serialize;
use serde_json::Value;

use super::client::{self, Verb};
use super::ApiResult;
use crate::models::Booking;

#[derive(Debug, Clone, Serialize)]
pub struct BookingForm {
    pub unit_id: u64,
    pub date: String,
    pub time: String,
    pub phone: String,
    pub notes: String,
}

pub async fn create_booking(token: &str, form: &BookingForm) -> ApiResult<String> {
    let env = client::send::<_, Value>(Verb::Post, "bookings", Some(token), form).await?;
    Ok(env.message_or("Viewing booked"))
}

pub async fn my_bookings(token: &str) -> ApiResult<Vec<Booking>> {
    Ok(client::get::<Vec<Booking>>("bookings", Some(token)).await?.into_page().items)
}

pub async fn cancel_booking(token: &str, id: u64) -> ApiResult<String> {
    let env = client::call::<Value>(Verb::Delete, &format!("bookings/{id}"), Some(token), None).await?;
    Ok(env.message_or("Booking cancelled"))
}

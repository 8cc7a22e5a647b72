//! REST API Bindings
//!
//! Frontend bindings to the remote marketplace API, organized by domain.
//! Every response is wrapped in the `{status, message, data, pagination}`
//! envelope; a `status: false` reply is an API-reported failure.

mod client;
mod auth;
mod bookings;
mod compounds;
mod developers;
mod favorites;
mod profile;
mod reviews;
mod site;
mod testimonials;
mod units;

use serde::Deserialize;
use thiserror::Error;

use crate::models::Pagination;

pub(crate) use client::{encode_component, with_query};

// Re-export all public items
pub use auth::*;
pub use bookings::*;
pub use compounds::*;
pub use developers::*;
pub use favorites::*;
pub use profile::*;
pub use reviews::*;
pub use site::*;
pub use testimonials::*;
pub use units::*;

/// Failure of a single API call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request never produced a response (offline, CORS, DNS, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with `status: false` or an error status
    #[error("{message}")]
    Rejected {
        /// HTTP status of the reply
        status: u16,
        message: String,
        /// Field validation messages, flattened
        errors: Vec<String>,
    },

    /// Bearer token expired or revoked (HTTP 401 on an authenticated call)
    #[error("Your session has expired, please sign in again")]
    Unauthorized,

    /// Body was not the envelope we expected
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Transport failures vs everything the API itself reported
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    /// The requested resource does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Rejected { status: 404, .. })
    }

    /// Text for a toast: the message plus the first validation detail
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected { message, errors, .. } => match errors.first() {
                Some(first) if first != message => format!("{message}: {first}"),
                _ => message.clone(),
            },
            ApiError::Network(_) => "Could not reach the server, check your connection".to_string(),
            other => other.to_string(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Response envelope shared by every endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default = "default_true")]
    pub status: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
    #[serde(default)]
    pub errors: Option<serde_json::Value>,
}

fn default_true() -> bool {
    true
}

impl<T> Envelope<T> {
    /// Payload of a successful reply; absent data is a decode error
    pub fn into_data(self) -> ApiResult<T> {
        self.data
            .ok_or_else(|| ApiError::Decode("response carried no data".to_string()))
    }

    /// Server message, or `fallback` when it sent none
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .clone()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// One page of a listing endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Option<Pagination>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self { items: Vec::new(), pagination: None }
    }
}

impl<T> Envelope<Vec<T>> {
    /// Listing payload; a missing `data` on a listing means "no rows"
    pub fn into_page(self) -> Page<T> {
        Page {
            items: self.data.unwrap_or_default(),
            pagination: self.pagination,
        }
    }
}

//! Frontend Models
//!
//! Views over the JSON the API returns. Fields the UI does not read are
//! ignored, and everything the UI reads is optional or defaulted, so a
//! payload change on the server degrades to blank fields rather than a
//! decode failure.

use serde::{Deserialize, Deserializer, Serialize};

/// Accept numbers that arrive either as JSON numbers or numeric strings
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrString {
        Num(f64),
        Str(String),
    }

    Ok(match Option::<NumOrString>::deserialize(deserializer)? {
        Some(NumOrString::Num(n)) => Some(n),
        Some(NumOrString::Str(s)) => s.trim().replace(',', "").parse().ok(),
        None => None,
    })
}

/// Short reference embedded in other payloads (unit.compound, unit.city, ...)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

/// Real-estate listing
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Unit {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub price: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub area: Option<f64>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    #[serde(rename = "type")]
    pub unit_type: Option<String>,
    pub status: Option<String>,
    pub image: Option<String>,
    pub images: Vec<String>,
    pub city: Option<NamedRef>,
    pub compound: Option<NamedRef>,
    pub developer: Option<NamedRef>,
    pub is_favorite: bool,
}

impl Unit {
    /// Cover image: explicit `image`, else first gallery entry
    pub fn cover(&self) -> Option<&str> {
        self.image
            .as_deref()
            .or_else(|| self.images.first().map(String::as_str))
    }

    /// Gallery with the cover first and no duplicates
    pub fn gallery(&self) -> Vec<String> {
        let mut all = Vec::new();
        if let Some(cover) = &self.image {
            all.push(cover.clone());
        }
        for img in &self.images {
            if !all.contains(img) {
                all.push(img.clone());
            }
        }
        all
    }
}

/// Residential development grouping units
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Compound {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub location: Option<String>,
    pub city: Option<NamedRef>,
    pub developer: Option<NamedRef>,
    pub units_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Developer {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub compounds_count: Option<u32>,
    pub units_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct City {
    pub id: u64,
    pub name: String,
}

/// Viewing appointment for a unit
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Booking {
    pub id: u64,
    pub unit: Option<NamedRef>,
    pub date: String,
    pub time: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

impl Booking {
    /// Only bookings the server still considers open can be cancelled
    pub fn is_cancellable(&self) -> bool {
        !matches!(
            self.status.as_deref(),
            Some("cancelled") | Some("canceled") | Some("completed") | Some("rejected")
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    pub id: u64,
    pub user_name: Option<String>,
    pub rating: u8,
    pub comment: String,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    pub id: u64,
    pub name: String,
    pub content: String,
    pub rating: Option<u8>,
    pub image: Option<String>,
}

/// Signed-in user profile, also persisted verbatim in localStorage
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub avatar: Option<String>,
}

/// Site-wide settings (contact details, social links, about text)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub site_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub about: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub whatsapp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Faq {
    pub id: u64,
    pub question: String,
    pub answer: String,
}

/// Headline counters shown on the home page
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub units: u64,
    pub compounds: u64,
    pub developers: u64,
    pub clients: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
}

/// Listing pagination block (`pagination` in the envelope)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    pub total: u64,
}

impl Pagination {
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page
    }
}

/// Format a price for display: thousands separators, no decimals
pub fn format_price(price: Option<f64>) -> String {
    let Some(price) = price else {
        return "Price on request".to_string();
    };
    let whole = price.round() as i64;
    let digits = whole.abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if whole < 0 {
        out.insert(0, '-');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unit_accepts_string_numbers_and_missing_fields() {
        let unit: Unit = serde_json::from_value(json!({
            "id": 7,
            "title": "Garden villa",
            "price": "3,250,000",
            "area": 240,
            "type": "villa",
            "unknown_field": [1, 2, 3]
        }))
        .unwrap();

        assert_eq!(unit.id, 7);
        assert_eq!(unit.price, Some(3_250_000.0));
        assert_eq!(unit.area, Some(240.0));
        assert_eq!(unit.unit_type.as_deref(), Some("villa"));
        assert!(unit.images.is_empty());
        assert!(!unit.is_favorite);
    }

    #[test]
    fn test_unit_garbage_price_becomes_none() {
        let unit: Unit = serde_json::from_value(json!({"id": 1, "price": "call us"})).unwrap();
        assert_eq!(unit.price, None);
    }

    #[test]
    fn test_gallery_puts_cover_first_without_duplicates() {
        let unit = Unit {
            image: Some("b.jpg".into()),
            images: vec!["a.jpg".into(), "b.jpg".into()],
            ..Default::default()
        };
        assert_eq!(unit.gallery(), vec!["b.jpg".to_string(), "a.jpg".to_string()]);
        assert_eq!(unit.cover(), Some("b.jpg"));
    }

    #[test]
    fn test_booking_cancellable() {
        let mut booking = Booking { status: Some("pending".into()), ..Default::default() };
        assert!(booking.is_cancellable());
        booking.status = Some("cancelled".into());
        assert!(!booking.is_cancellable());
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Some(1_234_567.4)), "1,234,567");
        assert_eq!(format_price(Some(999.0)), "999");
        assert_eq!(format_price(Some(1000.0)), "1,000");
        assert_eq!(format_price(None), "Price on request");
    }

    #[test]
    fn test_pagination_bounds() {
        let p = Pagination { current_page: 1, last_page: 3, per_page: 12, total: 30 };
        assert!(!p.has_prev());
        assert!(p.has_next());
        let last = Pagination { current_page: 3, ..p };
        assert!(last.has_prev());
        assert!(!last.has_next());
    }
}

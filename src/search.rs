//! Unit Search
//!
//! Filter model for the units listing (kept in the URL query string so
//! results are linkable) and the minimum-length gate for quick search.

use crate::config::MIN_SEARCH_LEN;

/// Sort keys the listing endpoint understands, with their labels
pub const SORT_OPTIONS: &[(&str, &str)] = &[
    ("", "Newest"),
    ("price_asc", "Price: low to high"),
    ("price_desc", "Price: high to low"),
    ("area_desc", "Largest area"),
];

pub const UNIT_TYPES: &[(&str, &str)] = &[
    ("", "Any type"),
    ("apartment", "Apartment"),
    ("villa", "Villa"),
    ("townhouse", "Townhouse"),
    ("duplex", "Duplex"),
    ("chalet", "Chalet"),
    ("office", "Office"),
];

/// Units listing filter
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnitFilter {
    pub q: String,
    pub city_id: Option<u64>,
    pub compound_id: Option<u64>,
    pub developer_id: Option<u64>,
    pub unit_type: String,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub bedrooms: Option<u32>,
    pub sort: String,
    pub page: u32,
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl UnitFilter {
    /// Query pairs; empty values are dropped by the URL builder
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("q", self.q.trim().to_string()),
            ("city_id", opt(self.city_id)),
            ("compound_id", opt(self.compound_id)),
            ("developer_id", opt(self.developer_id)),
            ("type", self.unit_type.clone()),
            ("min_price", opt(self.min_price)),
            ("max_price", opt(self.max_price)),
            ("bedrooms", opt(self.bedrooms)),
            ("sort", self.sort.clone()),
            ("page", if self.page > 1 { self.page.to_string() } else { String::new() }),
        ]
    }

    /// Rebuild from a query map lookup; unparseable numbers are dropped
    pub fn from_query(get: impl Fn(&str) -> Option<String>) -> Self {
        let num = |key: &str| get(key).and_then(|v| v.trim().parse::<u64>().ok());
        Self {
            q: get("q").unwrap_or_default(),
            city_id: num("city_id"),
            compound_id: num("compound_id"),
            developer_id: num("developer_id"),
            unit_type: get("type").unwrap_or_default(),
            min_price: num("min_price"),
            max_price: num("max_price"),
            bedrooms: num("bedrooms").and_then(|n| u32::try_from(n).ok()),
            sort: get("sort").unwrap_or_default(),
            page: num("page").and_then(|n| u32::try_from(n).ok()).unwrap_or(1).max(1),
        }
    }

    /// Same filter on another page
    pub fn with_page(&self, page: u32) -> Self {
        Self { page: page.max(1), ..self.clone() }
    }

    /// `/units?...` link for this filter
    pub fn href(&self) -> String {
        crate::api::with_query("/units", &self.to_query_pairs())
    }
}

/// Quick search term, or `None` when the input is too short to query
pub fn quick_search_term(input: &str) -> Option<&str> {
    let term = input.trim();
    (term.chars().count() >= MIN_SEARCH_LEN).then_some(term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_short_input_issues_no_search() {
        assert_eq!(quick_search_term(""), None);
        assert_eq!(quick_search_term("   a  "), None);
        assert_eq!(quick_search_term(" ab "), Some("ab"));
    }

    #[test]
    fn test_min_length_counts_chars_not_bytes() {
        // two Arabic letters are four bytes
        assert_eq!(quick_search_term("شق"), Some("شق"));
        assert_eq!(quick_search_term("ش"), None);
    }

    #[test]
    fn test_from_query_parses_and_drops_garbage() {
        let map: HashMap<&str, &str> = [
            ("q", "sea view"),
            ("city_id", "3"),
            ("min_price", "abc"),
            ("bedrooms", "2"),
            ("page", "0"),
        ]
        .into_iter()
        .collect();
        let filter = UnitFilter::from_query(|k| map.get(k).map(|v| v.to_string()));

        assert_eq!(filter.q, "sea view");
        assert_eq!(filter.city_id, Some(3));
        assert_eq!(filter.min_price, None);
        assert_eq!(filter.bedrooms, Some(2));
        assert_eq!(filter.page, 1);
    }

    #[test]
    fn test_first_page_is_not_sent() {
        let filter = UnitFilter { unit_type: "villa".into(), ..Default::default() };
        let pairs = filter.to_query_pairs();
        assert!(pairs.contains(&("type", "villa".to_string())));
        assert!(pairs.contains(&("page", String::new())));
        assert!(filter.with_page(3).to_query_pairs().contains(&("page", "3".to_string())));
    }
}

//! Unit Endpoints
//!
//! Listing, detail and quick search for real-estate units.

use super::client::{self, with_query};
use super::{ApiResult, Page};
use crate::config::{DEFAULT_PAGE_SIZE, QUICK_SEARCH_LIMIT};
use crate::models::Unit;
use crate::search::UnitFilter;

/// Filtered, paginated unit listing
pub async fn list_units(filter: &UnitFilter, token: Option<&str>) -> ApiResult<Page<Unit>> {
    let mut pairs = filter.to_query_pairs();
    pairs.push(("per_page", DEFAULT_PAGE_SIZE.to_string()));
    let path = with_query("units", &pairs);
    Ok(client::get::<Vec<Unit>>(&path, token).await?.into_page())
}

pub async fn get_unit(id: u64, token: Option<&str>) -> ApiResult<Unit> {
    client::get(&format!("units/{id}"), token).await?.into_data()
}

/// Units flagged as featured for the home page
pub async fn featured_units(token: Option<&str>) -> ApiResult<Vec<Unit>> {
    let path = with_query("units", &[("featured", "1".to_string())]);
    Ok(client::get::<Vec<Unit>>(&path, token).await?.into_page().items)
}

/// Type-ahead suggestions; callers gate on `search::quick_search_term`
pub async fn search_units(term: &str) -> ApiResult<Vec<Unit>> {
    let path = with_query(
        "units/search",
        &[("q", term.to_string()), ("limit", QUICK_SEARCH_LIMIT.to_string())],
    );
    Ok(client::get::<Vec<Unit>>(&path, None).await?.into_page().items)
}

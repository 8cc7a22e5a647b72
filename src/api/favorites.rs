//! Favorites Endpoints

use serde::{Deserialize, Serialize};

use super::client::{self, Verb};
use super::ApiResult;
use crate::models::Unit;

#[derive(Serialize)]
struct UnitIdArgs {
    unit_id: u64,
}

#[derive(Deserialize)]
struct ToggleReply {
    is_favorite: bool,
}

/// The user's saved units, flagged as favorites whatever the payload says
pub async fn list_favorites(token: &str) -> ApiResult<Vec<Unit>> {
    let units = client::get::<Vec<Unit>>("favorites", Some(token)).await?.into_page().items;
    Ok(mark_favorite(units))
}

fn mark_favorite(units: Vec<Unit>) -> Vec<Unit> {
    units
        .into_iter()
        .map(|unit| Unit { is_favorite: true, ..unit })
        .collect()
}

/// Flip a unit's favorite flag; returns the state the server settled on
pub async fn toggle_favorite(token: &str, unit_id: u64) -> ApiResult<bool> {
    let env = client::send::<_, ToggleReply>(Verb::Post, "favorites/toggle", Some(token), &UnitIdArgs { unit_id }).await?;
    Ok(env.into_data()?.is_favorite)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorites_listing_starts_filled() {
        // Favorites payloads usually omit the flag
        let units: Vec<Unit> = serde_json::from_value(serde_json::json!([
            {"id": 1, "title": "Villa"},
            {"id": 2, "title": "Loft", "is_favorite": false}
        ]))
        .unwrap();
        let marked = mark_favorite(units);
        assert!(marked.iter().all(|u| u.is_favorite));
        assert_eq!(marked[1].title, "Loft");
    }
}

//! Compound Endpoints

use super::client::{self, with_query};
use super::{ApiResult, Page};
use crate::models::{Compound, Unit};

fn page_pairs(page: u32) -> Vec<(&'static str, String)> {
    if page > 1 {
        vec![("page", page.to_string())]
    } else {
        Vec::new()
    }
}

pub async fn list_compounds(page: u32) -> ApiResult<Page<Compound>> {
    let path = with_query("compounds", &page_pairs(page));
    Ok(client::get::<Vec<Compound>>(&path, None).await?.into_page())
}

pub async fn get_compound(id: u64) -> ApiResult<Compound> {
    client::get(&format!("compounds/{id}"), None).await?.into_data()
}

/// Units belonging to one compound
pub async fn compound_units(id: u64, page: u32, token: Option<&str>) -> ApiResult<Page<Unit>> {
    let path = with_query(&format!("compounds/{id}/units"), &page_pairs(page));
    Ok(client::get::<Vec<Unit>>(&path, token).await?.into_page())
}

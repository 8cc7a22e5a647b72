//! Developer Endpoints

use super::client::{self, with_query};
use super::{ApiResult, Page};
use crate::models::{Compound, Developer};

pub async fn list_developers(page: u32) -> ApiResult<Page<Developer>> {
    let pairs = if page > 1 { vec![("page", page.to_string())] } else { Vec::new() };
    let path = with_query("developers", &pairs);
    Ok(client::get::<Vec<Developer>>(&path, None).await?.into_page())
}

pub async fn get_developer(id: u64) -> ApiResult<Developer> {
    client::get(&format!("developers/{id}"), None).await?.into_data()
}

pub async fn developer_compounds(id: u64) -> ApiResult<Vec<Compound>> {
    Ok(client::get::<Vec<Compound>>(&format!("developers/{id}/compounds"), None)
        .await?
        .into_page()
        .items)
}

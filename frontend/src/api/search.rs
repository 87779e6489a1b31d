use crate::api::api_url;
use crate::api::utils::{authenticated_get, error_message};
use async_trait::async_trait;
use log::debug;
use shared::services::SearchService;

pub async fn search_titles(query: &str) -> Result<Vec<String>, String> {
    debug!("Searching titles for: {}", query);

    let url = api_url(&format!("/api/search?q={}", urlencoding::encode(query)));
    let response = authenticated_get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send search request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let titles = response
        .json::<Vec<String>>()
        .await
        .map_err(|e| format!("Failed to parse search response: {}", e))?;

    debug!("Search for {} returned {} titles", query, titles.len());
    Ok(titles)
}

/// Title search backed by the HTTP API
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HttpSearchService;

#[async_trait(?Send)]
impl SearchService for HttpSearchService {
    async fn search(&self, query: &str) -> Result<Vec<String>, String> {
        search_titles(query).await
    }
}

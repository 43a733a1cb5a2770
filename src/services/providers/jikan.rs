/// Jikan (MyAnimeList) API client
///
/// Jikan needs no API key. Responses arrive in a `data`/`pagination`
/// envelope that is reshaped into [`AnimePage`] before leaving this module.
use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::anime::{AnimePage, ApiAnimeList},
};

#[derive(Clone)]
pub struct JikanClient {
    http_client: HttpClient,
    api_url: String,
}

impl JikanClient {
    pub fn new(api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url,
        }
    }

    async fn get_page(&self, path: &str, query: &[(&str, &str)]) -> AppResult<AnimePage> {
        let url = format!("{}{}", self.api_url, path);

        let response = self.http_client.get(&url).query(query).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Jikan returned status {}: {}",
                status, body
            )));
        }

        let list: ApiAnimeList = response.json().await?;
        Ok(list.into())
    }

    /// Top-rated anime, paged
    pub async fn top_anime(&self, page: u32) -> AppResult<AnimePage> {
        let page_param = page.to_string();
        let result = self
            .get_page("/top/anime", &[("page", page_param.as_str())])
            .await?;

        tracing::info!(page, results = result.data.len(), "Fetched top anime");

        Ok(result)
    }

    /// Title search over the anime catalog
    pub async fn search_anime(&self, query: &str, page: u32) -> AppResult<AnimePage> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        let page_param = page.to_string();
        let result = self
            .get_page("/anime", &[("q", query), ("page", page_param.as_str())])
            .await?;

        tracing::info!(
            query = %query,
            results = result.data.len(),
            "Anime search completed"
        );

        Ok(result)
    }
}

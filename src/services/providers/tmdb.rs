/// TMDb (The Movie Database) API client
///
/// Provides the listing surface (trending, search) for the discovery pages
/// and implements [`CatalogProvider`] for the recommender: detail fetch with
/// embedded videos/reviews and the per-movie recommendations list.
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;

use crate::{
    error::{AppError, AppResult},
    models::{Movie, MovieDetails, Page},
    services::providers::CatalogProvider,
};

#[derive(Clone)]
pub struct TmdbClient {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl TmdbClient {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> AppResult<T> {
        let url = format!("{}{}", self.api_url, path);

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(query)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDb returned status {}: {}",
                status, body
            )));
        }

        Ok(response.json().await?)
    }

    /// Movies trending this week, paged for infinite scroll
    pub async fn trending_movies(&self, page: u32) -> AppResult<Page<Movie>> {
        let page_param = page.to_string();
        let result: Page<Movie> = self
            .get_json("/trending/movie/week", &[("page", page_param.as_str())])
            .await?;

        tracing::info!(page, results = result.results.len(), "Fetched trending movies");

        Ok(result)
    }

    /// TV shows trending this week
    pub async fn trending_tv(&self, page: u32) -> AppResult<Page<Movie>> {
        let page_param = page.to_string();
        let result: Page<Movie> = self
            .get_json("/trending/tv/week", &[("page", page_param.as_str())])
            .await?;

        tracing::info!(page, results = result.results.len(), "Fetched trending TV shows");

        Ok(result)
    }

    /// Title search over the movie catalog
    pub async fn search_movies(&self, query: &str, page: u32) -> AppResult<Page<Movie>> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        let page_param = page.to_string();
        let result: Page<Movie> = self
            .get_json(
                "/search/movie",
                &[("query", query), ("page", page_param.as_str())],
            )
            .await?;

        tracing::info!(
            query = %query,
            results = result.results.len(),
            "Movie search completed"
        );

        Ok(result)
    }

    /// Detail record with trailer videos and reviews in one round trip
    pub async fn movie_details(&self, movie_id: u64) -> AppResult<MovieDetails> {
        let details: MovieDetails = self
            .get_json(
                &format!("/movie/{}", movie_id),
                &[("append_to_response", "videos,reviews")],
            )
            .await?;

        tracing::debug!(
            movie_id,
            videos = details.videos.results.len(),
            reviews = details.reviews.results.len(),
            "Fetched movie details"
        );

        Ok(details)
    }

    /// First page of TMDb's own recommendations for a movie
    pub async fn recommendations(&self, movie_id: u64) -> AppResult<Vec<Movie>> {
        let result: Page<Movie> = self
            .get_json(
                &format!("/movie/{}/recommendations", movie_id),
                &[("page", "1")],
            )
            .await?;

        tracing::debug!(
            movie_id,
            candidates = result.results.len(),
            "Fetched recommendation candidates"
        );

        Ok(result.results)
    }
}

#[async_trait::async_trait]
impl CatalogProvider for TmdbClient {
    async fn fetch_details(&self, movie_id: u64) -> AppResult<MovieDetails> {
        self.movie_details(movie_id).await
    }

    async fn fetch_recommendations(&self, movie_id: u64) -> AppResult<Vec<Movie>> {
        self.recommendations(movie_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_client() -> TmdbClient {
        TmdbClient::new("test_key".to_string(), "http://test.local".to_string())
    }

    #[tokio::test]
    async fn test_search_rejects_empty_query() {
        let client = create_test_client();
        let result = client.search_movies("", 1).await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_search_rejects_whitespace_query() {
        let client = create_test_client();
        let result = client.search_movies("   ", 1).await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_details_deserialization_with_appended_blocks() {
        let json = r#"{
            "id": 27205,
            "title": "Inception",
            "overview": "Cobb, a skilled thief...",
            "poster_path": "/poster.jpg",
            "vote_average": 8.4,
            "release_date": "2010-07-15",
            "genres": [{"id": 28, "name": "Action"}],
            "videos": {"results": [
                {"key": "YoHD9XEInc0", "site": "YouTube", "type": "Trailer", "name": "Official Trailer"}
            ]},
            "reviews": {"results": [
                {"author": "goldie", "content": "Pretty good.", "created_at": "2017-02-13T22:23:01.268Z"}
            ]}
        }"#;

        let details: MovieDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.id, 27205);
        assert_eq!(details.genres[0].name, "Action");
        assert_eq!(
            details.trailer_url(),
            Some("https://www.youtube.com/watch?v=YoHD9XEInc0".to_string())
        );
        assert_eq!(details.reviews.results[0].author, "goldie");
    }

    #[test]
    fn test_recommendations_page_shape() {
        let json = r#"{
            "page": 1,
            "results": [
                {"id": 155, "title": "The Dark Knight", "overview": "Batman raises the stakes."},
                {"id": 603, "title": "The Matrix"}
            ],
            "total_pages": 2,
            "total_results": 40
        }"#;

        let page: Page<Movie> = serde_json::from_str(json).unwrap();
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[1].overview, "");
    }
}

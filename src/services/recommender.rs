/// Embedding-based movie recommender
///
/// Ranks the catalog's candidate list for a movie by cosine similarity of
/// overview embeddings. Recommendations are a best-effort page enhancement:
/// every failure path degrades to an empty list, never an error.
use std::cmp::Ordering;
use std::sync::Arc;

use crate::{
    cache::MemoryCache,
    embedding::{cosine_similarity, TextEncoder},
    models::{Movie, MovieDetails, Recommendation},
    services::providers::CatalogProvider,
};

pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 5;

pub struct MovieRecommender {
    catalog: Arc<dyn CatalogProvider>,
    encoder: Arc<dyn TextEncoder>,
    /// movie id → detail record, so repeated targets skip the catalog
    detail_cache: MemoryCache<u64, MovieDetails>,
    /// movie id → overview embedding; overview text for an id is treated as
    /// stable for the process lifetime
    embedding_cache: MemoryCache<u64, Arc<Vec<f32>>>,
}

impl MovieRecommender {
    pub fn new(
        catalog: Arc<dyn CatalogProvider>,
        encoder: Arc<dyn TextEncoder>,
        detail_capacity: usize,
        embedding_capacity: usize,
    ) -> Self {
        Self {
            catalog,
            encoder,
            detail_cache: MemoryCache::new(detail_capacity),
            embedding_cache: MemoryCache::new(embedding_capacity),
        }
    }

    /// Returns up to `limit` movies most similar to the target, best first.
    ///
    /// The output never contains the target id. A target without overview
    /// text, a failed candidate fetch, or an empty candidate set all yield an
    /// empty list.
    pub async fn get_recommendations(&self, movie_id: u64, limit: usize) -> Vec<Recommendation> {
        let overview = self.resolve_overview(movie_id).await;
        if overview.trim().is_empty() {
            tracing::debug!(movie_id, "Target has no overview text, nothing to rank");
            return Vec::new();
        }

        let target = self.embedding_for(movie_id, &overview).await;

        let candidates = match self.catalog.fetch_recommendations(movie_id).await {
            Ok(candidates) => candidates,
            Err(e) => {
                tracing::warn!(
                    movie_id,
                    error = %e,
                    "Candidate fetch failed, returning no recommendations"
                );
                return Vec::new();
            }
        };

        let mut scored: Vec<(f32, Movie)> = Vec::with_capacity(candidates.len());
        for movie in candidates {
            // The catalog may list the target among its own candidates
            if movie.id == movie_id {
                continue;
            }
            let embedding = self.embedding_for(movie.id, &movie.overview).await;
            let score = cosine_similarity(&target, &embedding);
            scored.push((score, movie));
        }

        // Stable sort: equal scores keep the catalog's relative order
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
        scored.truncate(limit);

        tracing::info!(movie_id, results = scored.len(), "Ranked recommendations");

        scored
            .into_iter()
            .map(|(score, movie)| Recommendation {
                id: movie.id,
                title: movie.title,
                poster_path: movie.poster_path,
                score,
            })
            .collect()
    }

    /// Overview text for a movie: cache, then catalog, empty string on failure.
    async fn resolve_overview(&self, movie_id: u64) -> String {
        if let Some(details) = self.detail_cache.get(&movie_id).await {
            return details.overview;
        }

        match self.catalog.fetch_details(movie_id).await {
            Ok(details) => {
                let overview = details.overview.clone();
                self.detail_cache.put(movie_id, details).await;
                overview
            }
            Err(e) => {
                tracing::warn!(movie_id, error = %e, "Detail fetch failed, treating overview as empty");
                String::new()
            }
        }
    }

    /// Embedding for a movie id, encoding `overview` on a cache miss.
    async fn embedding_for(&self, movie_id: u64, overview: &str) -> Arc<Vec<f32>> {
        if let Some(embedding) = self.embedding_cache.get(&movie_id).await {
            return embedding;
        }

        let embedding = Arc::new(self.encoder.encode(overview));
        self.embedding_cache
            .put(movie_id, Arc::clone(&embedding))
            .await;
        embedding
    }
}

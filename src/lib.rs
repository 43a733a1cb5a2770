//! Movie, TV, and anime discovery services.
//!
//! Typed clients for TMDb and Jikan, an optional Groq-backed chat assistant,
//! and an embedding-based recommender that ranks a movie's candidate list by
//! cosine similarity of overview embeddings, with bounded in-process caches.

pub mod cache;
pub mod config;
pub mod embedding;
pub mod error;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use services::{
    ChatAssistant, JikanClient, MovieRecommender, TmdbClient, DEFAULT_RECOMMENDATION_LIMIT,
};

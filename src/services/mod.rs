pub mod chat;
pub mod providers;
pub mod recommender;

pub use chat::{ChatAssistant, ChatMessage};
pub use providers::{CatalogProvider, JikanClient, TmdbClient};
pub use recommender::{MovieRecommender, DEFAULT_RECOMMENDATION_LIMIT};

use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// TMDb API key (v3)
    pub tmdb_api_key: String,

    /// TMDb API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Jikan (MyAnimeList) API base URL
    #[serde(default = "default_jikan_api_url")]
    pub jikan_api_url: String,

    /// Groq API key for the chat assistant (assistant is disabled if unset)
    #[serde(default)]
    pub groq_api_key: Option<String>,

    /// Groq API base URL
    #[serde(default = "default_groq_api_url")]
    pub groq_api_url: String,

    /// Chat model served by Groq
    #[serde(default = "default_groq_model")]
    pub groq_model: String,

    /// Capacity of the movie-detail cache
    #[serde(default = "default_detail_cache_capacity")]
    pub detail_cache_capacity: usize,

    /// Capacity of the embedding cache
    #[serde(default = "default_embedding_cache_capacity")]
    pub embedding_cache_capacity: usize,

    /// Dimension of overview embeddings
    #[serde(default = "default_embedding_dimension")]
    pub embedding_dimension: usize,
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_jikan_api_url() -> String {
    "https://api.jikan.moe/v4".to_string()
}

fn default_groq_api_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_groq_model() -> String {
    "llama-3.1-8b-instant".to_string()
}

fn default_detail_cache_capacity() -> usize {
    512
}

fn default_embedding_cache_capacity() -> usize {
    2048
}

fn default_embedding_dimension() -> usize {
    384
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}

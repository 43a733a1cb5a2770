/// Movie catalog provider abstraction
///
/// The recommender consumes the catalog through this trait so tests can stub
/// upstream behavior and so another metadata source can be swapped in behind
/// the same two operations.
use crate::{
    error::AppResult,
    models::{Movie, MovieDetails},
};

pub mod jikan;
pub mod tmdb;

pub use jikan::JikanClient;
pub use tmdb::TmdbClient;

#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch the full detail record for a movie
    ///
    /// The detail record carries at least the overview text; a non-2xx
    /// upstream response surfaces as an error, never a partial record.
    async fn fetch_details(&self, movie_id: u64) -> AppResult<MovieDetails>;

    /// Fetch the catalog's suggested candidates for a movie
    ///
    /// Returns the first page of the upstream recommendations list. The
    /// catalog may include the target movie itself; callers filter by id.
    async fn fetch_recommendations(&self, movie_id: u64) -> AppResult<Vec<Movie>>;
}

pub mod anime;
pub mod movie;

pub use anime::{Anime, AnimePage};
pub use movie::{
    Genre, Movie, MovieDetails, Page, Recommendation, Review, ReviewList, Video, VideoList,
};

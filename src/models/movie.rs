use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A movie or TV show row as returned by TMDb list endpoints
/// (trending, search, recommendations).
///
/// TV rows carry `name` instead of `title`; the alias folds both into one
/// shape so listing pages and the recommender share a candidate type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: u64,
    #[serde(alias = "name")]
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f32>,
}

/// Paged list envelope used by TMDb trending/search/recommendations responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub page: u32,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// A single entry of the `videos` block on a detail response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Video {
    pub key: String,
    pub site: String,
    #[serde(rename = "type")]
    pub video_type: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VideoList {
    #[serde(default)]
    pub results: Vec<Video>,
}

/// A user review attached to a detail response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReviewList {
    #[serde(default)]
    pub results: Vec<Review>,
}

/// Full detail record from `GET /movie/{id}` with
/// `append_to_response=videos,reviews`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetails {
    pub id: u64,
    #[serde(alias = "name")]
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f32>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub videos: VideoList,
    #[serde(default)]
    pub reviews: ReviewList,
}

impl MovieDetails {
    /// Picks the watch URL of the best available YouTube trailer.
    ///
    /// Prefers an official `Trailer`, falls back to a `Teaser`; videos hosted
    /// elsewhere than YouTube are ignored.
    pub fn trailer_url(&self) -> Option<String> {
        let videos = &self.videos.results;
        videos
            .iter()
            .find(|v| v.site.eq_ignore_ascii_case("YouTube") && v.video_type == "Trailer")
            .or_else(|| {
                videos
                    .iter()
                    .find(|v| v.site.eq_ignore_ascii_case("YouTube") && v.video_type == "Teaser")
            })
            .map(|v| format!("https://www.youtube.com/watch?v={}", v.key))
    }
}

/// Display projection returned by the recommender
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    /// Cosine similarity to the target movie's overview, in [-1, 1]
    pub score: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_video(site: &str, video_type: &str, key: &str) -> Video {
        Video {
            key: key.to_string(),
            site: site.to_string(),
            video_type: video_type.to_string(),
            name: String::new(),
        }
    }

    #[test]
    fn test_movie_deserialization() {
        let json = r#"{
            "id": 27205,
            "title": "Inception",
            "overview": "Cobb, a skilled thief...",
            "poster_path": "/ljsZTbVsrQSqZgWeep2B1QiDKuh.jpg",
            "vote_average": 8.4
        }"#;

        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id, 27205);
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.vote_average, Some(8.4));
    }

    #[test]
    fn test_tv_row_uses_name_alias() {
        let json = r#"{"id": 1396, "name": "Breaking Bad"}"#;

        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.title, "Breaking Bad");
        assert_eq!(movie.overview, "");
        assert_eq!(movie.poster_path, None);
    }

    #[test]
    fn test_page_envelope_deserialization() {
        let json = r#"{
            "page": 2,
            "results": [{"id": 1, "title": "Movie 1"}],
            "total_pages": 10,
            "total_results": 200
        }"#;

        let page: Page<Movie> = serde_json::from_str(json).unwrap();
        assert_eq!(page.page, 2);
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.total_pages, 10);
    }

    #[test]
    fn test_video_type_field_rename() {
        let json = r#"{"key": "abc", "site": "YouTube", "type": "Trailer"}"#;

        let video: Video = serde_json::from_str(json).unwrap();
        assert_eq!(video.video_type, "Trailer");
    }

    #[test]
    fn test_review_date_parsing() {
        let json = r#"{
            "author": "goldie",
            "content": "Pretty good.",
            "created_at": "2017-02-13T22:23:01.268Z"
        }"#;

        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.author, "goldie");
        assert_eq!(review.created_at.timezone(), Utc);
    }

    #[test]
    fn test_details_default_blocks() {
        // Detail responses without append_to_response carry no videos/reviews
        let json = r#"{"id": 27205, "title": "Inception"}"#;

        let details: MovieDetails = serde_json::from_str(json).unwrap();
        assert!(details.videos.results.is_empty());
        assert!(details.reviews.results.is_empty());
        assert_eq!(details.trailer_url(), None);
    }

    #[test]
    fn test_trailer_prefers_trailer_over_teaser() {
        let details = MovieDetails {
            id: 1,
            title: "Test".to_string(),
            overview: String::new(),
            poster_path: None,
            vote_average: None,
            release_date: None,
            genres: vec![],
            videos: VideoList {
                results: vec![
                    make_video("YouTube", "Teaser", "teaser_key"),
                    make_video("YouTube", "Trailer", "trailer_key"),
                ],
            },
            reviews: ReviewList::default(),
        };

        assert_eq!(
            details.trailer_url(),
            Some("https://www.youtube.com/watch?v=trailer_key".to_string())
        );
    }

    #[test]
    fn test_trailer_falls_back_to_teaser() {
        let details = MovieDetails {
            id: 1,
            title: "Test".to_string(),
            overview: String::new(),
            poster_path: None,
            vote_average: None,
            release_date: None,
            genres: vec![],
            videos: VideoList {
                results: vec![
                    make_video("Vimeo", "Trailer", "vimeo_key"),
                    make_video("youtube", "Teaser", "teaser_key"),
                ],
            },
            reviews: ReviewList::default(),
        };

        // Non-YouTube trailer is skipped, lowercase site still matches
        assert_eq!(
            details.trailer_url(),
            Some("https://www.youtube.com/watch?v=teaser_key".to_string())
        );
    }
}

use serde::{Deserialize, Serialize};

/// An anime entry reshaped from Jikan's response format
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Anime {
    pub mal_id: u64,
    pub title: String,
    #[serde(default)]
    pub synopsis: String,
    pub score: Option<f32>,
    pub image_url: Option<String>,
    pub url: String,
}

/// One page of anime results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimePage {
    pub data: Vec<Anime>,
    pub has_next_page: bool,
}

// Raw Jikan API shapes. Jikan nests image variants per format; only the
// plain jpg URL is surfaced.

#[derive(Debug, Clone, Deserialize)]
pub struct ApiAnimeList {
    pub data: Vec<ApiAnime>,
    #[serde(default)]
    pub pagination: ApiPagination,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiPagination {
    #[serde(default)]
    pub has_next_page: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiAnime {
    pub mal_id: u64,
    pub url: String,
    #[serde(default)]
    pub images: ApiImages,
    pub title: String,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub score: Option<f32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiImages {
    #[serde(default)]
    pub jpg: ApiImageSet,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiImageSet {
    #[serde(default)]
    pub image_url: Option<String>,
}

impl From<ApiAnime> for Anime {
    fn from(api: ApiAnime) -> Self {
        Anime {
            mal_id: api.mal_id,
            title: api.title,
            synopsis: api.synopsis.unwrap_or_default(),
            score: api.score,
            image_url: api.images.jpg.image_url,
            url: api.url,
        }
    }
}

impl From<ApiAnimeList> for AnimePage {
    fn from(api: ApiAnimeList) -> Self {
        AnimePage {
            data: api.data.into_iter().map(Anime::from).collect(),
            has_next_page: api.pagination.has_next_page,
        }
    }
}

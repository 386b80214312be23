//! Jikan API v4 response types.
//!
//! These types represent the JSON responses for the resources the site
//! consumes. The API wraps single entities as `{ "data": ... }` and
//! paginated lists as `{ "data": [...], "pagination": {...} }`.

use serde::{Deserialize, Serialize};

/// Single-entity envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Data<T> {
    pub data: T,
}

/// Paginated envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

/// Pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub last_visible_page: u32,
    pub has_next_page: bool,
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub items: Option<PaginationItems>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationItems {
    pub count: u32,
    pub total: u32,
    pub per_page: u32,
}

/// Image set in both formats served by MAL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Images {
    pub jpg: ImageUrls,
    #[serde(default)]
    pub webp: Option<ImageUrls>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageUrls {
    pub image_url: Option<String>,
    #[serde(default)]
    pub small_image_url: Option<String>,
    #[serde(default)]
    pub large_image_url: Option<String>,
}

/// Reference to a MAL entity (genre, studio, producer, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityRef {
    pub mal_id: u32,
    #[serde(rename = "type")]
    pub entity_type: String,
    pub name: String,
    pub url: String,
}

/// Airing date range
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Aired {
    pub from: Option<String>,
    pub to: Option<String>,
    /// Human-readable range as MAL formats it
    #[serde(default)]
    pub string: Option<String>,
}

/// Broadcast slot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Broadcast {
    pub day: Option<String>,
    pub time: Option<String>,
    pub timezone: Option<String>,
    pub string: Option<String>,
}

/// Full anime details (`/anime/{id}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimeDetails {
    pub mal_id: u32,
    pub url: String,
    pub images: Images,

    // Titles
    pub title: String,
    pub title_english: Option<String>,
    pub title_japanese: Option<String>,
    #[serde(default)]
    pub title_synonyms: Vec<String>,

    // Type and status
    #[serde(rename = "type")]
    pub anime_type: Option<String>,
    pub source: Option<String>,
    pub episodes: Option<u32>,
    pub status: Option<String>,
    #[serde(default)]
    pub airing: bool,

    // Dates
    #[serde(default)]
    pub aired: Option<Aired>,
    pub duration: Option<String>,
    pub rating: Option<String>,

    // Scores and rankings
    pub score: Option<f64>,
    pub scored_by: Option<u64>,
    pub rank: Option<u32>,
    pub popularity: Option<u32>,
    pub members: Option<u64>,
    pub favorites: Option<u64>,

    // Synopsis
    pub synopsis: Option<String>,
    pub background: Option<String>,

    // Season
    pub season: Option<String>,
    pub year: Option<u32>,

    // Broadcast
    #[serde(default)]
    pub broadcast: Option<Broadcast>,

    // Producers, licensors, studios
    #[serde(default)]
    pub producers: Vec<EntityRef>,
    #[serde(default)]
    pub licensors: Vec<EntityRef>,
    #[serde(default)]
    pub studios: Vec<EntityRef>,

    // Genres, themes, demographics
    #[serde(default)]
    pub genres: Vec<EntityRef>,
    #[serde(default)]
    pub explicit_genres: Vec<EntityRef>,
    #[serde(default)]
    pub themes: Vec<EntityRef>,
    #[serde(default)]
    pub demographics: Vec<EntityRef>,
}

/// Character list entry (`/anime/{id}/characters`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterEdge {
    pub character: CharacterRef,
    pub role: Option<String>,
    #[serde(default)]
    pub favorites: Option<u64>,
    #[serde(default)]
    pub voice_actors: Vec<VoiceActor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterRef {
    pub mal_id: u32,
    pub url: String,
    pub images: Images,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceActor {
    pub person: PersonRef,
    pub language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonRef {
    pub mal_id: u32,
    pub url: String,
    #[serde(default)]
    pub images: Option<Images>,
    pub name: String,
}

/// Episode list entry (`/anime/{id}/episodes`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Episode {
    pub mal_id: u32,
    pub url: Option<String>,
    pub title: Option<String>,
    #[serde(default)]
    pub title_japanese: Option<String>,
    #[serde(default)]
    pub title_romanji: Option<String>,
    pub aired: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub filler: bool,
    #[serde(default)]
    pub recap: bool,
    #[serde(default)]
    pub forum_url: Option<String>,
}

/// Staff list entry (`/anime/{id}/staff`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffEdge {
    pub person: PersonRef,
    #[serde(default)]
    pub positions: Vec<String>,
}

/// Review entry (`/anime/{id}/reviews`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub mal_id: u32,
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub review_type: Option<String>,
    #[serde(default)]
    pub reactions: Option<Reactions>,
    pub date: Option<String>,
    pub review: String,
    pub score: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_spoiler: bool,
    #[serde(default)]
    pub is_preliminary: bool,
    pub user: Reviewer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reviewer {
    pub username: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub images: Option<Images>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Reactions {
    #[serde(default)]
    pub overall: u32,
    #[serde(default)]
    pub nice: u32,
    #[serde(default)]
    pub love_it: u32,
    #[serde(default)]
    pub funny: u32,
    #[serde(default)]
    pub confusing: u32,
    #[serde(default)]
    pub informative: u32,
    #[serde(default)]
    pub well_written: u32,
    #[serde(default)]
    pub creative: u32,
}

/// Recommendation entry (`/anime/{id}/recommendations`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub entry: MediaRef,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub votes: u32,
}

/// Reference to an anime or manga entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaRef {
    pub mal_id: u32,
    pub url: Option<String>,
    pub images: Images,
    pub title: String,
}

/// News entry (`/anime/{id}/news`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub mal_id: u32,
    pub url: Option<String>,
    pub title: String,
    pub date: Option<String>,
    #[serde(default)]
    pub author_username: Option<String>,
    #[serde(default)]
    pub author_url: Option<String>,
    #[serde(default)]
    pub forum_url: Option<String>,
    #[serde(default)]
    pub images: Option<Images>,
    #[serde(default)]
    pub comments: Option<u32>,
    #[serde(default)]
    pub excerpt: Option<String>,
}

/// Full character details (`/characters/{id}/full`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterFull {
    pub mal_id: u32,
    pub url: String,
    pub images: Images,
    pub name: String,
    #[serde(default)]
    pub name_kanji: Option<String>,
    #[serde(default)]
    pub nicknames: Vec<String>,
    #[serde(default)]
    pub favorites: Option<u64>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub anime: Vec<CharacterAnimeAppearance>,
    #[serde(default)]
    pub manga: Vec<CharacterMangaAppearance>,
    #[serde(default)]
    pub voices: Vec<CharacterVoice>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterAnimeAppearance {
    pub role: Option<String>,
    pub anime: MediaRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterMangaAppearance {
    pub role: Option<String>,
    pub manga: MediaRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterVoice {
    pub language: String,
    pub person: PersonRef,
}

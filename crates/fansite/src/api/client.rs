//! Rate-limited Jikan API client.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use super::error::{ApiError, FetchError, Resource};
use super::throttle::{RequestThrottle, MIN_REQUEST_INTERVAL};
use super::types::{
    AnimeDetails, CharacterEdge, CharacterFull, Data, Episode, NewsItem, Page, Recommendation,
    Review, StaffEdge,
};

/// Base URL of the public Jikan API
pub const JIKAN_API_BASE: &str = "https://api.jikan.moe/v4";

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = "fansite/0.1.0";

/// Jikan API v4 client
///
/// One typed accessor per resource the site consumes. All requests of one
/// instance share a single throttle, so the spacing guarantee holds across
/// resource types. The client never retries and never caches: repeated
/// calls with the same arguments always hit the network again.
pub struct JikanClient {
    /// HTTP client
    client: Client,
    /// Base URL for the Jikan API
    base_url: String,
    /// Request throttle shared by all accessors
    throttle: RequestThrottle,
}

impl JikanClient {
    /// Create a client for the public Jikan API with the default throttle
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_base_url(JIKAN_API_BASE, MIN_REQUEST_INTERVAL)
    }

    /// Create a client against an arbitrary base URL with a custom spacing
    pub fn with_base_url(
        base_url: impl Into<String>,
        min_interval: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(HTTP_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            throttle: RequestThrottle::new(min_interval),
        })
    }

    /// Make a throttled GET request and decode the JSON body
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        self.throttle.acquire().await;
        debug!(url = %url, "Issuing API request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ApiError::Network { source })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ApiError::RateLimited);
        }
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| ApiError::Decode { source })
    }

    /// Fetch full details for an anime
    pub async fn anime_details(&self, anime_id: u32) -> Result<AnimeDetails, FetchError> {
        debug!(anime_id, "Fetching anime details");
        let envelope: Data<AnimeDetails> = self
            .get(&format!("/anime/{}", anime_id))
            .await
            .map_err(|e| FetchError::new(Resource::AnimeDetails, e))?;
        Ok(envelope.data)
    }

    /// Fetch the character list for an anime
    pub async fn anime_characters(
        &self,
        anime_id: u32,
    ) -> Result<Vec<CharacterEdge>, FetchError> {
        debug!(anime_id, "Fetching characters");
        let envelope: Data<Vec<CharacterEdge>> = self
            .get(&format!("/anime/{}/characters", anime_id))
            .await
            .map_err(|e| FetchError::new(Resource::AnimeCharacters, e))?;
        Ok(envelope.data)
    }

    /// Fetch one page of the episode list; `None` requests the first page
    pub async fn anime_episodes(
        &self,
        anime_id: u32,
        page: Option<u32>,
    ) -> Result<Page<Episode>, FetchError> {
        let page = page.unwrap_or(1);
        debug!(anime_id, page, "Fetching episodes");
        self.get(&format!("/anime/{}/episodes?page={}", anime_id, page))
            .await
            .map_err(|e| FetchError::new(Resource::AnimeEpisodes, e))
    }

    /// Fetch the staff list for an anime
    pub async fn anime_staff(&self, anime_id: u32) -> Result<Vec<StaffEdge>, FetchError> {
        debug!(anime_id, "Fetching staff");
        let envelope: Data<Vec<StaffEdge>> = self
            .get(&format!("/anime/{}/staff", anime_id))
            .await
            .map_err(|e| FetchError::new(Resource::AnimeStaff, e))?;
        Ok(envelope.data)
    }

    /// Fetch one page of reviews; `None` requests the first page
    pub async fn anime_reviews(
        &self,
        anime_id: u32,
        page: Option<u32>,
    ) -> Result<Page<Review>, FetchError> {
        let page = page.unwrap_or(1);
        debug!(anime_id, page, "Fetching reviews");
        self.get(&format!("/anime/{}/reviews?page={}", anime_id, page))
            .await
            .map_err(|e| FetchError::new(Resource::AnimeReviews, e))
    }

    /// Fetch recommendations for an anime
    pub async fn anime_recommendations(
        &self,
        anime_id: u32,
    ) -> Result<Vec<Recommendation>, FetchError> {
        debug!(anime_id, "Fetching recommendations");
        let envelope: Data<Vec<Recommendation>> = self
            .get(&format!("/anime/{}/recommendations", anime_id))
            .await
            .map_err(|e| FetchError::new(Resource::AnimeRecommendations, e))?;
        Ok(envelope.data)
    }

    /// Fetch one page of news; `None` requests the first page
    pub async fn anime_news(
        &self,
        anime_id: u32,
        page: Option<u32>,
    ) -> Result<Page<NewsItem>, FetchError> {
        let page = page.unwrap_or(1);
        debug!(anime_id, page, "Fetching news");
        self.get(&format!("/anime/{}/news?page={}", anime_id, page))
            .await
            .map_err(|e| FetchError::new(Resource::AnimeNews, e))
    }

    /// Fetch full details for a character
    pub async fn character_details(
        &self,
        character_id: u32,
    ) -> Result<CharacterFull, FetchError> {
        debug!(character_id, "Fetching character details");
        let envelope: Data<CharacterFull> = self
            .get(&format!("/characters/{}/full", character_id))
            .await
            .map_err(|e| FetchError::new(Resource::CharacterDetails, e))?;
        Ok(envelope.data)
    }
}

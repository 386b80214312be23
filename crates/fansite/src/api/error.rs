//! Error taxonomy for Jikan API access.
//!
//! Failures carry a machine-readable kind plus a resource context, so
//! callers can branch on what went wrong without string matching.

use std::fmt;
use thiserror::Error;

/// Logical resources exposed by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    AnimeDetails,
    AnimeCharacters,
    AnimeEpisodes,
    AnimeStaff,
    AnimeReviews,
    AnimeRecommendations,
    AnimeNews,
    CharacterDetails,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::AnimeDetails => "anime details",
            Resource::AnimeCharacters => "characters",
            Resource::AnimeEpisodes => "episodes",
            Resource::AnimeStaff => "staff",
            Resource::AnimeReviews => "reviews",
            Resource::AnimeRecommendations => "recommendations",
            Resource::AnimeNews => "news",
            Resource::CharacterDetails => "character details",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What went wrong with a single HTTP exchange
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure: DNS, connection refused, timeout
    #[error("network error: {source}")]
    Network { source: reqwest::Error },

    /// HTTP 429 from the server; never retried automatically
    #[error("rate limit exceeded, wait and retry")]
    RateLimited,

    /// Any other non-2xx status
    #[error("API request failed: {status} {status_text}")]
    Http { status: u16, status_text: String },

    /// 2xx response whose body did not match the expected shape
    #[error("failed to decode response: {source}")]
    Decode { source: reqwest::Error },
}

impl ApiError {
    /// HTTP status for `Http` errors
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A failed call to one of the typed accessors
///
/// Tags the underlying [`ApiError`] with the resource being fetched; the
/// cause stays reachable through `std::error::Error::source`, so callers
/// can tell "which call failed" apart from "why".
#[derive(Debug, Error)]
#[error("failed to fetch {resource}")]
pub struct FetchError {
    resource: Resource,
    #[source]
    source: ApiError,
}

impl FetchError {
    pub(crate) fn new(resource: Resource, source: ApiError) -> Self {
        Self { resource, source }
    }

    /// Which resource the failed call targeted
    pub fn resource(&self) -> Resource {
        self.resource
    }

    /// The underlying failure kind
    pub fn kind(&self) -> &ApiError {
        &self.source
    }
}

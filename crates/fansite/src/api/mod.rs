//! Jikan API v4 client implementation.
//!
//! This module provides a rate-limited client for the read-only Jikan API
//! (MyAnimeList unofficial API). Requests are spaced out by a minimum
//! interval; failures are reported through a tagged error taxonomy.

pub mod client;
pub mod error;
pub mod throttle;
pub mod types;

pub use client::JikanClient;
pub use error::{ApiError, FetchError, Resource};
pub use throttle::RequestThrottle;
pub use types::*;

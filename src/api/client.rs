//! Discovery API client.
//!
//! One client per app, shared behind `Arc<dyn DiscoveryApi>` so screens can
//! fetch without knowing about reqwest and tests can substitute a stub.
//! All four endpoints share the same error policy: status >= 400 wins over
//! the body, a body that fails to decode is a decode error, and a request
//! that never produced a response is a network error.

use std::fmt;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Url;
use serde::de::DeserializeOwned;

use super::types::{DestinationDetails, Place, RestaurantDetails, UserDetails};

/// Production endpoint for the travel discovery service.
pub const DEFAULT_BASE_URL: &str = "https://travel.letsbuildthatapp.com/travel_discovery";

/// Errors that can occur while fetching a remote resource.
/// All variants are terminal for the owning view model; there is no retry.
#[derive(Debug)]
pub enum FetchError {
    /// Transport-level failure: no response reached us (DNS, refused, timeout).
    Network(String),
    /// The server answered with a failure status (>= 400), body ignored.
    Status(u16),
    /// The response body did not match the expected shape, or the endpoint
    /// locator could not be constructed in the first place.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(detail) => write!(f, "network error: {detail}"),
            FetchError::Status(code) => write!(f, "bad status: HTTP {code}"),
            FetchError::Decode(detail) => write!(f, "decode error: {detail}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// The remote travel-discovery surface, one method per endpoint.
#[async_trait]
pub trait DiscoveryApi: Send + Sync {
    /// Places belonging to a category, e.g. "Food" or "Live events".
    async fn category_places(&self, name: &str) -> Result<Vec<Place>, FetchError>;

    /// Description and photo set for a destination.
    async fn destination_details(&self, name: &str) -> Result<DestinationDetails, FetchError>;

    /// Full restaurant record: dishes, photos, reviews.
    async fn restaurant_details(&self, id: u32) -> Result<RestaurantDetails, FetchError>;

    /// Creator profile with posts.
    async fn user_details(&self, id: u32) -> Result<UserDetails, FetchError>;
}

/// HTTP implementation of [`DiscoveryApi`] backed by reqwest.
pub struct DiscoveryClient {
    base_url: String,
    client: reqwest::Client,
}

impl DiscoveryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Builds the full locator for a resource. The query value is interpolated
    /// into the URL string and percent-encoded by the parser, so names with
    /// spaces ("Live events") come out URL-safe. An unparseable locator is a
    /// decode error; the caller never issues a request for it.
    fn endpoint(&self, resource: &str, query_key: &str, query_value: &str) -> Result<Url, FetchError> {
        let raw = format!("{}/{resource}?{query_key}={query_value}", self.base_url);
        Url::parse(&raw).map_err(|_| FetchError::Decode("invalid endpoint".to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if status >= 400 {
            warn!("discovery API error: HTTP {status}");
            return Err(FetchError::Status(status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[async_trait]
impl DiscoveryApi for DiscoveryClient {
    async fn category_places(&self, name: &str) -> Result<Vec<Place>, FetchError> {
        let url = self.endpoint("category", "name", &name.to_lowercase())?;
        self.get_json(url).await
    }

    async fn destination_details(&self, name: &str) -> Result<DestinationDetails, FetchError> {
        let url = self.endpoint("destination", "name", &name.to_lowercase())?;
        self.get_json(url).await
    }

    async fn restaurant_details(&self, id: u32) -> Result<RestaurantDetails, FetchError> {
        let url = self.endpoint("restaurant", "id", &id.to_string())?;
        self.get_json(url).await
    }

    async fn user_details(&self, id: u32) -> Result<UserDetails, FetchError> {
        let url = self.endpoint("user", "id", &id.to_string())?;
        self.get_json(url).await
    }
}

//! HTTP client for the posts and photos API.
//!
//! One gateway object, three operations: fetch all posts (direct call),
//! fetch all posts (single-shot stream), fetch all photos (direct call).
//! Each operation performs exactly one GET and decodes the body as a JSON
//! array; there is no retry and no caching across calls.

use futures_util::Stream;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::models::{Photo, Post};

/// Errors returned by [`ApiClient`] operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a status outside [200, 300).
    #[error("server returned HTTP {status}")]
    BadServerResponse { status: u16 },

    /// The request never produced a response (connect, timeout, TLS, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body is not the expected JSON array shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the posts and photos endpoints.
///
/// Cheap to clone; all clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client with the fixed request timeout from `config`.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch all posts.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers with a
    /// non-success status, or the body does not decode as a post array.
    pub async fn fetch_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.fetch_list("/posts").await
    }

    /// Fetch all posts as a single-shot stream.
    ///
    /// The stream is lazy: no request is made until it is first polled.
    /// It emits exactly one `Ok(posts)` or one `Err(..)`, then completes.
    /// Dropping the stream mid-flight aborts the request. Given identical
    /// server responses this yields exactly what [`Self::fetch_posts`]
    /// returns; it exists for callers that want a subscription-shaped API.
    pub fn fetch_posts_stream(&self) -> impl Stream<Item = Result<Vec<Post>, ApiError>> + '_ {
        async_stream::stream! {
            yield self.fetch_posts().await;
        }
    }

    /// Fetch all photos.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers with a
    /// non-success status, or the body does not decode as a photo array.
    pub async fn fetch_photos(&self) -> Result<Vec<Photo>, ApiError> {
        self.fetch_list("/photos").await
    }

    /// GET `{base_url}{path}` and decode the body as a JSON array of `T`.
    async fn fetch_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let url = format!("{}{path}", self.base_url);
        debug!(url = %url, "Fetching list");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::BadServerResponse {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let items: Vec<T> = serde_json::from_slice(&body)?;
        debug!(url = %url, count = items.len(), "List fetched");
        Ok(items)
    }
}

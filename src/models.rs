//! Record types decoded from API responses.
//!
//! Plain immutable data carriers. Wire format uses camelCase field names
//! (`userId`, `albumId`, `thumbnailUrl`); both types are `Serialize` as well
//! so tests can round them through a mock server.

use serde::{Deserialize, Serialize};

/// A blog-style post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

/// A photo with a full-size URL and a thumbnail URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: i64,
    pub album_id: i64,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
}

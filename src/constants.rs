//! Shared constants used across the application.

/// User agent string sent with every API request.
pub const USER_AGENT: &str = concat!("placefeed/", env!("CARGO_PKG_VERSION"));

//! Placefeed library.
//!
//! The headless core of a posts-and-photos browser for a
//! JSONPlaceholder-style REST API: record types, an async API client, and
//! two UI-facing list controllers. A presentation layer subscribes to the
//! controllers' state and calls their load operations; everything else is
//! internal.

pub mod api;
pub mod config;
pub mod constants;
pub mod models;
pub mod viewmodel;

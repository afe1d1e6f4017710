//! UI-facing list controllers.
//!
//! Each controller owns one screen's state exclusively and publishes it as a
//! snapshot through a `tokio::sync::watch` channel. The presentation layer
//! reads snapshots with `state()` or awaits changes on `subscribe()`; the
//! load operations declared here are the only mutators.

pub mod photos;
pub mod posts;

pub use photos::{PhotoGrid, PhotoGridState};
pub use posts::{PostList, PostListState};

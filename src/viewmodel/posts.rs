//! Post list controller.

use futures_util::StreamExt;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::api::{ApiClient, ApiError};
use crate::models::Post;

/// Snapshot of the post list screen's state.
///
/// `error_message` is only ever set by a finished load, so it never overlaps
/// with `is_loading`.
#[derive(Debug, Clone, Default)]
pub struct PostListState {
    pub posts: Vec<Post>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

/// Controller for the post list screen.
///
/// `load` and `load_via_stream` are alternate triggers into the same
/// state machine: loading clears the prior error, a successful load replaces
/// `posts` wholesale, a failed load sets `error_message` and keeps the stale
/// `posts`. Overlapping loads are not de-duplicated; if a caller triggers two
/// loads the later completion wins.
pub struct PostList {
    api: ApiClient,
    state: watch::Sender<PostListState>,
}

impl PostList {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: watch::Sender::new(PostListState::default()),
        }
    }

    /// Current state snapshot.
    #[must_use]
    pub fn state(&self) -> PostListState {
        self.state.borrow().clone()
    }

    /// Receiver that is notified on every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<PostListState> {
        self.state.subscribe()
    }

    /// Load posts with the direct-call API variant.
    pub async fn load(&self) {
        self.begin_load();
        let result = self.api.fetch_posts().await;
        self.finish_load(result);
    }

    /// Load posts by subscribing to the stream API variant.
    ///
    /// Terminal state is identical to [`Self::load`] for the same server
    /// response.
    pub async fn load_via_stream(&self) {
        self.begin_load();
        let stream = self.api.fetch_posts_stream();
        futures_util::pin_mut!(stream);
        let Some(result) = stream.next().await else {
            // The producer yields exactly once before completing; if it ever
            // completes without a value, finish the load with posts and the
            // error untouched.
            self.state.send_modify(|state| state.is_loading = false);
            return;
        };
        self.finish_load(result);
    }

    fn begin_load(&self) {
        self.state.send_modify(|state| {
            state.is_loading = true;
            state.error_message = None;
        });
    }

    fn finish_load(&self, result: Result<Vec<Post>, ApiError>) {
        self.state.send_modify(|state| {
            match result {
                Ok(posts) => {
                    debug!(count = posts.len(), "Posts loaded");
                    state.posts = posts;
                }
                Err(e) => {
                    warn!("Post load failed: {e}");
                    state.error_message = Some(format!("failed to load posts: {e}"));
                }
            }
            state.is_loading = false;
        });
    }
}

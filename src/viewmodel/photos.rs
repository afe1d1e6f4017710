//! Photo grid controller with reveal-window pagination.
//!
//! The grid fetches the full photo set once and reveals it to the UI in
//! fixed-size pages. Pagination is entirely a client-side prefix over the
//! fetched set; it never goes back to the network.

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::api::{ApiClient, ApiError};
use crate::models::Photo;

/// Snapshot of the photo grid screen's state.
///
/// Invariant: `visible_photos == all_photos[..revealed]` and
/// `revealed <= all_photos.len()` after every operation.
#[derive(Debug, Clone, Default)]
pub struct PhotoGridState {
    pub all_photos: Vec<Photo>,
    pub visible_photos: Vec<Photo>,
    pub is_loading: bool,
    pub error_message: Option<String>,
    /// Length of the currently revealed prefix. Only ever grows.
    pub revealed: usize,
}

/// Controller for the photo grid screen.
pub struct PhotoGrid {
    api: ApiClient,
    page_size: usize,
    state: watch::Sender<PhotoGridState>,
}

impl PhotoGrid {
    #[must_use]
    pub fn new(api: ApiClient, page_size: usize) -> Self {
        Self {
            api,
            page_size,
            state: watch::Sender::new(PhotoGridState::default()),
        }
    }

    /// Current state snapshot.
    #[must_use]
    pub fn state(&self) -> PhotoGridState {
        self.state.borrow().clone()
    }

    /// Receiver that is notified on every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<PhotoGridState> {
        self.state.subscribe()
    }

    /// Fetch the full photo set and reveal the first page.
    ///
    /// No-op when photos are already loaded, so a screen re-appearing does
    /// not refetch. On failure both photo sequences stay empty and
    /// `error_message` carries a display string.
    pub async fn load_initial(&self) {
        if !self.state.borrow().all_photos.is_empty() {
            debug!("Photos already loaded, skipping fetch");
            return;
        }

        self.state.send_modify(|state| {
            state.is_loading = true;
            state.error_message = None;
        });

        let result = self.api.fetch_photos().await;
        self.apply_fetch_result(result);
    }

    /// Reveal the next page when `current` is the last visible photo.
    ///
    /// Intended to be called by the UI for each row it renders. `None`, an
    /// empty window, or a photo that is not in the window are all no-ops.
    pub fn load_more_if_needed(&self, current: Option<&Photo>) {
        let Some(current) = current else { return };

        let at_end = {
            let state = self.state.borrow();
            match state.visible_photos.iter().position(|p| p.id == current.id) {
                Some(position) => position + 1 == state.visible_photos.len(),
                None => false,
            }
        };

        if at_end {
            self.reveal_more();
        }
    }

    /// Grow the reveal window by one page, capped at the full set.
    ///
    /// Idempotent once everything is visible.
    pub fn reveal_more(&self) {
        self.state.send_if_modified(|state| {
            if state.revealed >= state.all_photos.len() {
                return false;
            }
            state.revealed = next_reveal(state.revealed, self.page_size, state.all_photos.len());
            state.visible_photos = state.all_photos[..state.revealed].to_vec();
            debug!(revealed = state.revealed, total = state.all_photos.len(), "Revealed more photos");
            true
        });
    }

    fn apply_fetch_result(&self, result: Result<Vec<Photo>, ApiError>) {
        self.state.send_modify(|state| {
            match result {
                Ok(photos) => {
                    debug!(count = photos.len(), "Photos loaded");
                    state.revealed = self.page_size.min(photos.len());
                    state.visible_photos = photos[..state.revealed].to_vec();
                    state.all_photos = photos;
                }
                Err(e) => {
                    warn!("Photo load failed: {e}");
                    state.error_message = Some(format!("failed to load photos: {e}"));
                }
            }
            state.is_loading = false;
        });
    }
}

/// Next reveal window length: one more page, capped at the set size.
fn next_reveal(revealed: usize, page_size: usize, total: usize) -> usize {
    total.min(revealed + page_size)
}

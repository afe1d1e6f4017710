use anyhow::{Context, Result};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use placefeed::api::ApiClient;
use placefeed::config::Config;
use placefeed::viewmodel::{PhotoGrid, PostList};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}

/// One-shot demo driver: load the post list once, then walk the photo grid's
/// reveal window to the end the way a scrolling UI would.
async fn run() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    init_tracing()?;

    info!("Starting placefeed");

    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    info!(base_url = %config.base_url, page_size = config.page_size, "Configuration loaded");

    let api = ApiClient::new(&config);

    let post_list = PostList::new(api.clone());
    post_list.load().await;
    let state = post_list.state();
    match state.error_message {
        Some(message) => warn!(%message, "Post list errored"),
        None => {
            info!(count = state.posts.len(), "Post list loaded");
            for post in state.posts.iter().take(3) {
                info!(id = post.id, title = %post.title, "Post");
            }
        }
    }

    let grid = PhotoGrid::new(api, config.page_size);
    grid.load_initial().await;

    loop {
        let state = grid.state();
        if let Some(message) = state.error_message {
            warn!(%message, "Photo grid errored");
            break;
        }
        info!(
            visible = state.visible_photos.len(),
            total = state.all_photos.len(),
            "Photo reveal window"
        );
        let before = state.visible_photos.len();
        grid.load_more_if_needed(state.visible_photos.last());
        if grid.state().visible_photos.len() == before {
            break;
        }
    }

    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,placefeed=debug"));

    // Check if JSON logging is requested
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| matches!(v.to_lowercase().as_str(), "json" | "structured"))
        .unwrap_or(false);

    if use_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;
    }

    Ok(())
}

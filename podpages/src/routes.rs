//! HTTP handlers for the rendered pages
//!
//! Two routes are served: the home page listing and the episode detail
//! page. Both go through the page cache, so a request only reaches the
//! episodes API when the cached copy has outlived its TTL.

use crate::cache::PageCache;
use crate::error::{Error, Result};
use crate::home::HomePage;
use crate::render;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use podfeed::EpisodeClient;
use std::sync::Arc;

/// Cache key of the home page
pub const HOME_CACHE_KEY: &str = "home";

/// Shared state for the page handlers
#[derive(Clone)]
pub struct PagesState {
    /// Episodes API client
    pub client: EpisodeClient,
    /// Rendered page cache
    pub cache: Arc<PageCache>,
    /// TTL of the home page, in seconds
    pub home_ttl_secs: u64,
    /// TTL of episode detail pages, in seconds
    pub episode_ttl_secs: u64,
}

impl PagesState {
    pub fn new(client: EpisodeClient, home_ttl_secs: u64, episode_ttl_secs: u64) -> Self {
        Self {
            client,
            cache: Arc::new(PageCache::new()),
            home_ttl_secs,
            episode_ttl_secs,
        }
    }

    /// Pre-build the home page so the first visitor hits a warm cache
    ///
    /// A failure is logged and otherwise ignored; the first request will
    /// retry the build.
    pub async fn warm_home(&self) {
        match home_html(self).await {
            Ok(_) => tracing::info!("Home page cache warmed"),
            Err(e) => tracing::warn!("Could not warm the home page cache: {}", e),
        }
    }
}

/// Crée le router des pages
pub fn create_pages_router(state: PagesState) -> Router {
    Router::new()
        .route("/", get(home_page))
        .route("/episodes/{id}", get(episode_page))
        .with_state(state)
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Error::Feed(podfeed::Error::EpisodeNotFound(_)) => {
                (StatusCode::NOT_FOUND, "Episódio não encontrado")
            }
            _ => (
                StatusCode::BAD_GATEWAY,
                "Não foi possível carregar os episódios",
            ),
        };

        tracing::error!("Page build failed: {}", self);
        let html = render::render_error_page(status.as_u16(), message);
        (status, Html(html)).into_response()
    }
}

/// GET /
/// Home page, built from the latest episodes feed
async fn home_page(State(state): State<PagesState>) -> Result<Html<String>> {
    Ok(Html(home_html(&state).await?))
}

/// GET /episodes/{id}
/// Detail page of a single episode
async fn episode_page(
    State(state): State<PagesState>,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    Ok(Html(episode_html(&state, &id).await?))
}

async fn home_html(state: &PagesState) -> Result<String> {
    let client = state.client.clone();
    state
        .cache
        .get_or_rebuild(HOME_CACHE_KEY, state.home_ttl_secs, move || async move {
            let episodes = client.latest_episodes().await?;
            let home = HomePage::from_episodes(episodes);
            Ok(render::render_home(&home))
        })
        .await
}

async fn episode_html(state: &PagesState, id: &str) -> Result<String> {
    let key = format!("episode:{}", id);
    let client = state.client.clone();
    let id = id.to_string();
    state
        .cache
        .get_or_rebuild(&key, state.episode_ttl_secs, move || async move {
            let episode = client.episode(&id).await?;
            Ok(render::render_episode(&episode))
        })
        .await
}

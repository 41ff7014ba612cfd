//! HTTP API for the playback state
//!
//! Exposes the player store over REST plus an SSE stream:
//!
//! - `GET  /api/player` - current state snapshot
//! - `POST /api/player/play` - replace the queue with one episode and play it
//! - `POST /api/player/toggle` - flip the playing flag
//! - `POST /api/player/state` - force the playing flag (audio callbacks)
//! - `GET  /api/player/events` - SSE stream; snapshot first, then updates
//!
//! All endpoints answer with the full [`PlayerState`], so page scripts can
//! treat every response and every SSE event the same way.

use crate::state::{PlayerState, PlayerStore};
use axum::{
    extract::State,
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse,
    },
    routing::{get, post},
    Json, Router,
};
use podfeed::Episode;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

/// Request body for `POST /api/player/state`
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct PlayingStateRequest {
    /// Desired value of the playing flag
    pub playing: bool,
}

/// Handler for GET /api/player
#[utoipa::path(
    get,
    path = "/api/player",
    responses(
        (status = 200, description = "Current player state", body = PlayerState)
    ),
    tag = "player"
)]
pub async fn get_player(State(store): State<Arc<PlayerStore>>) -> Json<PlayerState> {
    Json(store.snapshot())
}

/// Handler for POST /api/player/play
#[utoipa::path(
    post,
    path = "/api/player/play",
    request_body = Episode,
    responses(
        (status = 200, description = "Queue replaced, playback started", body = PlayerState)
    ),
    tag = "player"
)]
pub async fn post_play(
    State(store): State<Arc<PlayerStore>>,
    Json(episode): Json<Episode>,
) -> Json<PlayerState> {
    info!(episode_id = %episode.id, "Play episode");
    Json(store.play(episode))
}

/// Handler for POST /api/player/toggle
#[utoipa::path(
    post,
    path = "/api/player/toggle",
    responses(
        (status = 200, description = "Playing flag flipped", body = PlayerState)
    ),
    tag = "player"
)]
pub async fn post_toggle(State(store): State<Arc<PlayerStore>>) -> Json<PlayerState> {
    Json(store.toggle_play())
}

/// Handler for POST /api/player/state
#[utoipa::path(
    post,
    path = "/api/player/state",
    request_body = PlayingStateRequest,
    responses(
        (status = 200, description = "Playing flag updated", body = PlayerState)
    ),
    tag = "player"
)]
pub async fn post_state(
    State(store): State<Arc<PlayerStore>>,
    Json(request): Json<PlayingStateRequest>,
) -> Json<PlayerState> {
    Json(store.set_playing_state(request.playing))
}

/// Handler for GET /api/player/events (SSE)
///
/// Sends the current snapshot immediately, then one event per mutation.
/// Clients reconnecting after a hiccup repaint from the first event.
pub async fn player_events(State(store): State<Arc<PlayerStore>>) -> impl IntoResponse {
    let mut rx = store.subscribe();
    let snapshot = store.snapshot();

    let stream = async_stream::stream! {
        // 1. Envoyer d'abord l'état courant
        let json = serde_json::to_string(&snapshot).unwrap();
        yield Ok::<_, axum::Error>(Event::default().data(json));

        // 2. Puis streamer les mises à jour en temps réel
        while let Ok(state) = rx.recv().await {
            let json = serde_json::to_string(&state).unwrap();
            yield Ok::<_, axum::Error>(Event::default().data(json));
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Crée le router pour l'API du lecteur
///
/// Les chemins sont relatifs; le serveur les monte sous `/api/player`.
pub fn create_player_router(store: Arc<PlayerStore>) -> Router {
    Router::new()
        .route("/", get(get_player))
        .route("/play", post(post_play))
        .route("/toggle", post(post_toggle))
        .route("/state", post(post_state))
        .route("/events", get(player_events))
        .with_state(store)
}

/// API OpenAPI pour le lecteur
#[derive(utoipa::OpenApi)]
#[openapi(
    paths(
        get_player,
        post_play,
        post_toggle,
        post_state,
    ),
    components(
        schemas(PlayerState, Episode, PlayingStateRequest)
    ),
    tags(
        (name = "player", description = "Playback state endpoints")
    )
)]
pub struct PlayerApiDoc;

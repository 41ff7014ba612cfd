//! Playback state for Podarium
//!
//! This crate owns the shared player state behind the persistent player bar:
//! which episodes are queued, which one is current and whether audio is
//! playing. It exposes the state as explicit operations on a store that
//! broadcasts a snapshot to subscribers after every change, plus an HTTP API
//! (REST + SSE) for the pages.
//!
//! # Example
//!
//! ```
//! use podplayer::PlayerStore;
//!
//! let store = PlayerStore::new();
//!
//! // until something plays, the bar shows its empty state
//! assert!(store.snapshot().current_episode().is_none());
//! ```

pub mod api;
pub mod state;

#[cfg(feature = "server")]
pub mod podserver_ext;

// Re-exports
pub use api::{create_player_router, PlayerApiDoc, PlayingStateRequest};
pub use state::{PlayerState, PlayerStore};

#[cfg(feature = "server")]
pub use podserver_ext::PlayerApiExt;

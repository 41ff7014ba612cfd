//! Shared playback state
//!
//! A single [`PlayerStore`] owns everything the player bar shows: the queue
//! of episodes, which one is current and whether audio is playing. State is
//! mutated only through the explicit operations below, and every mutation
//! broadcasts a fresh snapshot to subscribers before returning, so widgets
//! never poll and never reach into hidden globals.
//!
//! The store is injected where it is needed (`Arc<PlayerStore>`); there is
//! deliberately no process-wide singleton.

use podfeed::Episode;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use tokio::sync::broadcast;

/// Capacity of the broadcast channel feeding subscribers
const BROADCAST_CAPACITY: usize = 64;

/// Snapshot of the playback state
///
/// Serializes in camelCase, matching the episode model, so the same JSON
/// shape flows through the REST API, the SSE stream and the page scripts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    /// Episodes queued for playback
    pub episode_list: Vec<Episode>,
    /// Index of the current episode within `episode_list`
    pub current_episode_index: usize,
    /// Whether audio is currently playing
    pub is_playing: bool,
}

impl PlayerState {
    /// The episode the index points at, if any
    pub fn current_episode(&self) -> Option<&Episode> {
        self.episode_list.get(self.current_episode_index)
    }
}

/// Owner of the playback state
///
/// Cheap to share behind an `Arc`; all methods take `&self`.
pub struct PlayerStore {
    state: RwLock<PlayerState>,
    tx: broadcast::Sender<PlayerState>,
}

impl Default for PlayerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerStore {
    /// Create a store with an empty queue and playback stopped
    pub fn new() -> Self {
        Self {
            state: RwLock::new(PlayerState::default()),
            tx: broadcast::channel(BROADCAST_CAPACITY).0,
        }
    }

    /// Replace the queue with a single episode and start playing it
    ///
    /// The index always lands on 0, so it stays within bounds whatever the
    /// previous queue looked like.
    pub fn play(&self, episode: Episode) -> PlayerState {
        let snapshot = {
            let mut state = self.state.write().unwrap();
            state.episode_list = vec![episode];
            state.current_episode_index = 0;
            state.is_playing = true;
            state.clone()
        };
        self.publish(snapshot)
    }

    /// Flip the playing flag
    pub fn toggle_play(&self) -> PlayerState {
        let snapshot = {
            let mut state = self.state.write().unwrap();
            state.is_playing = !state.is_playing;
            state.clone()
        };
        self.publish(snapshot)
    }

    /// Force the playing flag to the given value
    ///
    /// Used by audio element callbacks (play/pause/ended) so external pause
    /// sources keep the store in sync.
    pub fn set_playing_state(&self, playing: bool) -> PlayerState {
        let snapshot = {
            let mut state = self.state.write().unwrap();
            state.is_playing = playing;
            state.clone()
        };
        self.publish(snapshot)
    }

    /// Current state snapshot
    pub fn snapshot(&self) -> PlayerState {
        self.state.read().unwrap().clone()
    }

    /// Subscribe to state changes
    ///
    /// Every mutation delivers a full snapshot. Only the most recent
    /// snapshots are buffered: a receiver that falls further behind gets a
    /// lag error on its next `recv`, after which consumers resynchronize
    /// from [`Self::snapshot`] (the SSE stream does so by reconnecting).
    pub fn subscribe(&self) -> broadcast::Receiver<PlayerState> {
        self.tx.subscribe()
    }

    fn publish(&self, snapshot: PlayerState) -> PlayerState {
        // No receivers is fine
        let _ = self.tx.send(snapshot.clone());
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_episode(id: &str) -> Episode {
        Episode {
            id: id.to_string(),
            title: format!("Episode {}", id),
            members: "Diego e Mayk".to_string(),
            thumbnail: format!("http://stub/{}.jpg", id),
            duration: 3981,
            duration_as_string: "01:06:21".to_string(),
            published_at: "8 jan 21".to_string(),
            url: format!("http://stub/{}.m4a", id),
            description: String::new(),
        }
    }

    #[test]
    fn test_initial_state_is_empty() {
        let store = PlayerStore::new();
        let state = store.snapshot();

        assert!(state.episode_list.is_empty());
        assert_eq!(state.current_episode_index, 0);
        assert!(!state.is_playing);
        assert!(state.current_episode().is_none());
    }

    #[test]
    fn test_play_replaces_queue() {
        let store = PlayerStore::new();
        store.play(sample_episode("a"));

        // Playing a second episode replaces the queue entirely
        let state = store.play(sample_episode("b"));
        assert_eq!(state.episode_list.len(), 1);
        assert_eq!(state.current_episode_index, 0);
        assert!(state.is_playing);
        assert_eq!(state.current_episode().unwrap().id, "b");
    }

    #[test]
    fn test_toggle_play_flips() {
        let store = PlayerStore::new();

        assert!(store.toggle_play().is_playing);
        assert!(!store.toggle_play().is_playing);
        assert!(store.toggle_play().is_playing);
    }

    #[test]
    fn test_set_playing_state_is_idempotent() {
        let store = PlayerStore::new();
        store.play(sample_episode("a"));

        assert!(!store.set_playing_state(false).is_playing);
        assert!(!store.set_playing_state(false).is_playing);
        assert!(store.set_playing_state(true).is_playing);
    }

    #[tokio::test]
    async fn test_subscribers_receive_each_mutation() {
        let store = PlayerStore::new();
        let mut rx = store.subscribe();

        store.play(sample_episode("a"));
        store.toggle_play();

        let first = rx.recv().await.unwrap();
        assert!(first.is_playing);
        assert_eq!(first.current_episode().unwrap().id, "a");

        let second = rx.recv().await.unwrap();
        assert!(!second.is_playing);
        assert_eq!(second.current_episode().unwrap().id, "a");
    }

    #[tokio::test]
    async fn test_slow_subscriber_gets_lag_error_past_capacity() {
        let store = PlayerStore::new();
        let mut rx = store.subscribe();

        for _ in 0..(BROADCAST_CAPACITY + 1) {
            store.toggle_play();
        }

        // The oldest snapshot fell off the buffer
        assert!(matches!(
            rx.recv().await,
            Err(broadcast::error::RecvError::Lagged(_))
        ));
        // The retained snapshots still arrive afterwards
        assert!(rx.recv().await.is_ok());
    }

    #[tokio::test]
    async fn test_late_subscriber_misses_nothing_after_subscribe() {
        let store = PlayerStore::new();

        // Mutations before subscribing are not replayed
        store.play(sample_episode("a"));

        let mut rx = store.subscribe();
        store.set_playing_state(false);

        let seen = rx.recv().await.unwrap();
        assert!(!seen.is_playing);
        assert!(rx.try_recv().is_err());
    }
}

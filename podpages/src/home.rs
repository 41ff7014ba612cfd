//! Home page model
//!
//! The home page shows the episode list split in two slices: the two most
//! recent episodes get a highlighted card layout, everything after them goes
//! into the tabular listing. The split preserves the order returned by the
//! feed (publication date, descending).

use podfeed::Episode;
use serde::Serialize;

/// Number of episodes shown in the highlighted "latest" section
pub const LATEST_EPISODE_COUNT: usize = 2;

/// Data backing the home page and its hydration payload
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    /// The most recent episodes (at most [`LATEST_EPISODE_COUNT`])
    pub latest_episodes: Vec<Episode>,
    /// Remaining episodes, same order as fetched
    pub all_episodes: Vec<Episode>,
}

impl HomePage {
    /// Split a fetched episode list into the two home page sections
    ///
    /// The input is expected to be sorted by publication date descending,
    /// as returned by [`podfeed::EpisodeClient::latest_episodes`]. Lists
    /// shorter than [`LATEST_EPISODE_COUNT`] end up entirely in the latest
    /// section.
    pub fn from_episodes(episodes: Vec<Episode>) -> Self {
        let split = episodes.len().min(LATEST_EPISODE_COUNT);
        let mut latest_episodes = episodes;
        let all_episodes = latest_episodes.split_off(split);

        Self {
            latest_episodes,
            all_episodes,
        }
    }

    /// Total number of episodes across both sections
    pub fn episode_count(&self) -> usize {
        self.latest_episodes.len() + self.all_episodes.len()
    }
}

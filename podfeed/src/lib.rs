//! Episodes API client library for Podarium
//!
//! This crate provides a Rust client for the JSON episodes API behind the
//! Podarium listing pages, together with the normalized episode model shared
//! by the page renderer and the playback API.
//!
//! # Features
//!
//! - **Latest Episodes**: Fetch the most recent episodes, sorted by
//!   publication date, limited to a configurable count
//! - **Episode Lookup**: Fetch a single episode by its identifier
//! - **Normalization**: Durations become `HH:MM:SS` labels, publication
//!   dates become pt-BR labels (`8 jan 21`), audio URLs are flattened
//! - **Configuration Extension**: Feed URL, limit and timeout managed
//!   through podconfig
//!
//! # Example
//!
//! ```no_run
//! use podfeed::EpisodeClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EpisodeClient::new().await?;
//!
//!     let episodes = client.latest_episodes().await?;
//!     println!("Found {} episodes", episodes.len());
//!
//!     for episode in &episodes {
//!         println!("{} - {} ({})",
//!             episode.published_at,
//!             episode.title,
//!             episode.duration_as_string
//!         );
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Configuration Extension
//!
//! When the `podconfig` feature is enabled, this crate provides a
//! configuration extension trait for the feed settings:
//!
//! ```no_run
//! use podconfig::get_config;
//! use podfeed::{EpisodeClient, FeedConfigExt};
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = get_config();
//!
//! let client = EpisodeClient::builder()
//!     .base_url(config.get_feed_base_url()?)
//!     .limit(config.get_feed_limit()?)
//!     .timeout(Duration::from_secs(config.get_feed_timeout_secs()?))
//!     .build()
//!     .await?;
//! # let _ = client;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod format;
pub mod models;

#[cfg(feature = "podconfig")]
pub mod config_ext;

// Re-exports
pub use client::{ClientBuilder, EpisodeClient};
pub use error::{Error, Result};
pub use models::{Episode, WireEpisode, WireFile};

#[cfg(feature = "podconfig")]
pub use config_ext::FeedConfigExt;

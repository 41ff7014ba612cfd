//! Server-rendered pages for Podarium
//!
//! This crate renders the podcast pages as static HTML and caches them with
//! a TTL, so the episodes API is only hit when a page has outlived its
//! revalidation interval. Requests arriving during a rebuild, or after a
//! rebuild failure, receive the last successfully built copy.
//!
//! # Features
//!
//! - **Home page**: two most recent episodes highlighted, the rest in a
//!   tabular listing
//! - **Episode pages**: one detail page per episode, cached individually
//! - **Revalidation**: per-page TTLs (home 8h, episodes 24h by default),
//!   configurable through podconfig
//! - **Hydration**: each page embeds its data as a JSON island for the
//!   client-side player script
//!
//! # Example
//!
//! ```no_run
//! use podfeed::EpisodeClient;
//! use podpages::{create_pages_router, PagesState};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let client = EpisodeClient::new().await?;
//! let state = PagesState::new(client, 8 * 3600, 24 * 3600);
//! state.warm_home().await;
//!
//! let router = create_pages_router(state);
//! # let _ = router;
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod error;
pub mod home;
pub mod render;
pub mod routes;

#[cfg(feature = "podconfig")]
pub mod config_ext;

#[cfg(feature = "server")]
pub mod podserver_ext;

// Re-exports
pub use cache::{CacheEntry, PageCache};
pub use error::{Error, Result};
pub use home::{HomePage, LATEST_EPISODE_COUNT};
pub use routes::{create_pages_router, PagesState, HOME_CACHE_KEY};

#[cfg(feature = "podconfig")]
pub use config_ext::PagesConfigExt;

#[cfg(feature = "server")]
pub use podserver_ext::PagesExt;

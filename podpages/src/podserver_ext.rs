//! Extension pour intégrer les pages rendues dans podserver
//!
//! Ce module fournit le trait `PagesExt` qui enregistre les routes des
//! pages sur le serveur, configurées depuis podconfig.

use crate::config_ext::PagesConfigExt;
use crate::routes::{create_pages_router, PagesState};
use anyhow::Result;
use podfeed::{EpisodeClient, FeedConfigExt};
use podserver::Server;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Trait d'extension pour ajouter les pages rendues à podserver
pub trait PagesExt {
    /// Initialise les pages et enregistre les routes HTTP
    ///
    /// Le client des épisodes et les intervalles de revalidation sont lus
    /// depuis podconfig.
    ///
    /// # Routes enregistrées
    ///
    /// - `GET /` - Page d'accueil (liste des épisodes)
    /// - `GET /episodes/{id}` - Page de détail d'un épisode
    ///
    /// # Exemple
    ///
    /// ```rust,ignore
    /// use podpages::PagesExt;
    /// use podserver::ServerBuilder;
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut server = ServerBuilder::new_configured().build();
    ///     let pages = server.init_pages().await?;
    ///     pages.warm_home().await;
    ///     server.start().await;
    ///     Ok(())
    /// }
    /// ```
    async fn init_pages(&mut self) -> Result<Arc<PagesState>>;

    /// Initialise les pages avec un client d'épisodes existant
    ///
    /// Permet de partager la même instance de client entre les pages et
    /// d'autres composants.
    async fn init_pages_with_client(&mut self, client: EpisodeClient) -> Result<Arc<PagesState>>;
}

impl PagesExt for Server {
    async fn init_pages(&mut self) -> Result<Arc<PagesState>> {
        let config = podconfig::get_config();
        let client = EpisodeClient::builder()
            .base_url(config.get_feed_base_url()?)
            .limit(config.get_feed_limit()?)
            .timeout(Duration::from_secs(config.get_feed_timeout_secs()?))
            .build()
            .await?;

        self.init_pages_with_client(client).await
    }

    async fn init_pages_with_client(&mut self, client: EpisodeClient) -> Result<Arc<PagesState>> {
        let config = podconfig::get_config();
        let home_ttl_secs = config.get_home_revalidate_secs()?;
        let episode_ttl_secs = config.get_episode_revalidate_secs()?;

        let state = PagesState::new(client, home_ttl_secs, episode_ttl_secs);
        let router = create_pages_router(state.clone());
        self.add_router("/", router).await;

        info!(
            "Pages initialized (home TTL: {}s, episode TTL: {}s)",
            home_ttl_secs, episode_ttl_secs
        );

        Ok(Arc::new(state))
    }
}

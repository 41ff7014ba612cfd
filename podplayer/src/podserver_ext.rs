//! Extension pour intégrer l'API du lecteur dans podserver
//!
//! Ce module fournit le trait `PlayerApiExt` qui permet d'ajouter facilement
//! l'API REST du lecteur au serveur.

use crate::api::{create_player_router, PlayerApiDoc};
use crate::state::PlayerStore;
use anyhow::Result;
use podserver::Server;
use std::sync::Arc;
use utoipa::OpenApi;

/// Trait d'extension pour ajouter l'API du lecteur à podserver
pub trait PlayerApiExt {
    /// Initialise l'API du lecteur et enregistre les routes HTTP
    ///
    /// # Routes enregistrées
    ///
    /// - `GET /api/player` - État courant du lecteur
    /// - `POST /api/player/play` - Jouer un épisode
    /// - `POST /api/player/toggle` - Basculer lecture/pause
    /// - `POST /api/player/state` - Forcer l'état de lecture
    /// - `GET /api/player/events` - Flux SSE des changements d'état
    /// - `GET /swagger-ui/player` - Documentation interactive Swagger
    ///
    /// # Exemple
    ///
    /// ```rust,ignore
    /// use podplayer::{PlayerApiExt, PlayerStore};
    /// use podserver::ServerBuilder;
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let store = Arc::new(PlayerStore::new());
    ///     let mut server = ServerBuilder::new_configured().build();
    ///     server.init_player_api(store).await?;
    ///     server.start().await;
    ///     Ok(())
    /// }
    /// ```
    async fn init_player_api(&mut self, store: Arc<PlayerStore>) -> Result<()>;
}

impl PlayerApiExt for Server {
    async fn init_player_api(&mut self, store: Arc<PlayerStore>) -> Result<()> {
        let api_router = create_player_router(store);
        let openapi = PlayerApiDoc::openapi();
        self.add_openapi(api_router, openapi, "player").await;

        Ok(())
    }
}

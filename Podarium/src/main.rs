use podpages::PagesExt;
use podplayer::{PlayerApiExt, PlayerStore};
use podserver::{ServerBuilder, init_logging};
use rust_embed::RustEmbed;
use std::sync::Arc;
use tracing::info;

/// Assets statiques servis sous `/assets` : feuille de style, script du
/// lecteur et icônes SVG.
#[derive(RustEmbed, Clone)]
#[folder = "assets"]
struct Assets;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ========== PHASE 1 : Infrastructure ==========

    init_logging();

    let mut server = ServerBuilder::new_configured().build();

    // Routes personnalisées de l'application
    server
        .add_route("/info", || async {
            serde_json::json!({
                "name": "Podarium",
                "version": env!("CARGO_PKG_VERSION"),
            })
        })
        .await;

    // ========== PHASE 2 : Configuration métier ==========

    // Initialiser l'API du lecteur avec son flux SSE
    info!("🎧 Initializing player API...");
    let store = Arc::new(PlayerStore::new());
    server
        .init_player_api(store)
        .await
        .expect("Failed to initialize player API");

    // Enregistrer les pages rendues (accueil + détail d'épisode)
    info!("📄 Initializing rendered pages...");
    let pages = server
        .init_pages()
        .await
        .expect("Failed to initialize pages");
    pages.warm_home().await;

    // Servir les assets embarqués
    info!("🖼️ Registering static assets...");
    server.add_dir::<Assets>("/assets").await;

    // ========== PHASE 3 : Démarrage du serveur ==========

    info!("🌐 Starting HTTP server...");
    server.start().await;

    let server_info = server.info();
    info!("✅ Podarium is ready!");
    info!(
        "  - Pages : http://{}:{}/",
        server_info.base_url, server_info.http_port
    );
    info!(
        "  - API   : http://{}:{}/swagger-ui/player",
        server_info.base_url, server_info.http_port
    );
    info!("Press Ctrl+C to stop...");
    server.wait().await;

    Ok(())
}

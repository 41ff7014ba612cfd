//! # podserver - Serveur web haut niveau basé sur Axum
//!
//! Cette crate fournit une abstraction simple pour créer le serveur HTTP de
//! Podarium avec Axum : composition de routers, fichiers statiques embarqués,
//! documentation OpenAPI et arrêt gracieux.
//!
//! ## Fonctionnalités
//!
//! - 🚀 **API de haut niveau** : Interface simple pour composer un serveur Axum
//! - 📁 **Fichiers statiques** : Serve d'assets embarqués avec `RustEmbed`
//! - 📚 **Documentation OpenAPI** : Génération automatique de Swagger UI
//! - ⚡ **Arrêt gracieux** : Gestion propre de l'arrêt sur Ctrl+C
//!
//! ## Architecture
//!
//! - [`server`] : Implémentation du serveur principal et du builder
//! - [`logs`] : Initialisation de `tracing` depuis la configuration
//!
//! Les crates métier étendent [`Server`] par des traits d'extension : chaque
//! domaine (lecteur, pages) enregistre ses routes sur le serveur sans que
//! `podserver` ne les connaisse.
//!
//! ## Exemple d'utilisation
//!
//! ```rust,no_run
//! use podserver::{ServerBuilder, init_logging};
//!
//! #[tokio::main]
//! async fn main() {
//!     init_logging();
//!
//!     // Création du serveur depuis la configuration globale
//!     let mut server = ServerBuilder::new_configured().build();
//!
//!     // Ajout d'une route JSON
//!     server.add_route("/info", || async {
//!         serde_json::json!({"status": "ok"})
//!     }).await;
//!
//!     // Démarrage
//!     server.start().await;
//!     server.wait().await;
//! }
//! ```

pub mod logs;
pub mod server;

pub use logs::init_logging;
pub use server::{Server, ServerBuilder, ServerInfo};

//! Cache de pages rendues avec TTL
//!
//! Ce module fournit le cache qui porte la régénération périodique des pages:
//! - Cache in-memory clé -> HTML rendu, horodaté à la construction
//! - Une entrée plus jeune que son TTL est servie telle quelle
//! - Une entrée périmée déclenche une reconstruction, une seule à la fois
//! - Pendant une reconstruction, les lecteurs reçoivent l'entrée périmée
//!
//! # Graceful degradation
//!
//! Si la reconstruction échoue (API des épisodes injoignable), l'entrée
//! périmée reste servie et l'échec est journalisé. Une page jamais
//! construite propage l'erreur au handler.

use crate::error::Result;
use std::collections::HashMap;
use std::future::Future;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::{Mutex, RwLock};

/// Horodatage Unix courant en secondes
fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Une page rendue avec son horodatage de construction
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// HTML complet de la page
    pub html: String,
    /// Horodatage Unix de la construction (secondes)
    pub built_at: u64,
}

impl CacheEntry {
    /// Crée une entrée horodatée à maintenant
    pub fn new(html: String) -> Self {
        Self {
            html,
            built_at: now_unix(),
        }
    }

    /// Vérifie si l'entrée est encore dans son TTL
    pub fn is_fresh(&self, ttl_secs: u64) -> bool {
        now_unix().saturating_sub(self.built_at) < ttl_secs
    }

    /// Âge de l'entrée en secondes
    pub fn age_secs(&self) -> u64 {
        now_unix().saturating_sub(self.built_at)
    }
}

/// Cache de pages avec régénération sérialisée
///
/// Une seule reconstruction est en vol à la fois, toutes clés confondues.
/// Les lecteurs ne bloquent jamais sur une reconstruction tant qu'une
/// copie périmée existe.
pub struct PageCache {
    /// Entrées clé -> page rendue
    entries: RwLock<HashMap<String, CacheEntry>>,
    /// Garde de reconstruction (une régénération à la fois)
    rebuilding: Mutex<()>,
}

impl PageCache {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            rebuilding: Mutex::new(()),
        }
    }

    /// Récupère une page, en la reconstruisant si son TTL est dépassé
    ///
    /// # Logique
    ///
    /// 1. Entrée fraîche: retour immédiat
    /// 2. Reconstruction déjà en vol: sert la copie périmée si elle existe,
    ///    sinon attend son tour (premier accès à froid)
    /// 3. Reconstruit via `rebuild`, stocke et retourne le résultat
    /// 4. Échec de reconstruction: sert la copie périmée avec un warning,
    ///    ou propage l'erreur si la page n'a jamais été construite
    pub async fn get_or_rebuild<F, Fut>(&self, key: &str, ttl_secs: u64, rebuild: F) -> Result<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String>>,
    {
        // 1. Entrée fraîche
        {
            let entries = self.entries.read().await;
            if let Some(entry) = entries.get(key) {
                if entry.is_fresh(ttl_secs) {
                    return Ok(entry.html.clone());
                }
            }
        }

        // 2. Devenir le reconstructeur, ou servir la copie périmée
        let _guard = match self.rebuilding.try_lock() {
            Ok(guard) => guard,
            Err(_) => {
                {
                    let entries = self.entries.read().await;
                    if let Some(entry) = entries.get(key) {
                        tracing::debug!(
                            "Rebuild in flight, serving stale '{}' (age {}s)",
                            key,
                            entry.age_secs()
                        );
                        return Ok(entry.html.clone());
                    }
                }
                // Rien à servir: premier accès à froid, on attend son tour
                self.rebuilding.lock().await
            }
        };

        // La reconstruction qu'on a attendue a pu concerner cette clé
        {
            let entries = self.entries.read().await;
            if let Some(entry) = entries.get(key) {
                if entry.is_fresh(ttl_secs) {
                    return Ok(entry.html.clone());
                }
            }
        }

        // 3. Reconstruction
        match rebuild().await {
            Ok(html) => {
                let mut entries = self.entries.write().await;
                entries.insert(key.to_string(), CacheEntry::new(html.clone()));
                tracing::debug!("Rebuilt page '{}'", key);
                Ok(html)
            }
            Err(e) => {
                // 4. Échec: copie périmée si disponible
                let entries = self.entries.read().await;
                if let Some(entry) = entries.get(key) {
                    tracing::warn!(
                        "Rebuild failed for '{}', serving stale copy (age {}s): {}",
                        key,
                        entry.age_secs(),
                        e
                    );
                    return Ok(entry.html.clone());
                }
                Err(e)
            }
        }
    }

    /// Invalide une entrée (la prochaine lecture reconstruira)
    pub async fn invalidate(&self, key: &str) {
        let mut entries = self.entries.write().await;
        entries.remove(key);
    }

    /// Nombre d'entrées présentes, fraîches ou non
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for PageCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    async fn insert_aged(cache: &PageCache, key: &str, html: &str, age_secs: u64) {
        let mut entries = cache.entries.write().await;
        entries.insert(
            key.to_string(),
            CacheEntry {
                html: html.to_string(),
                built_at: now_unix().saturating_sub(age_secs),
            },
        );
    }

    #[test]
    fn test_entry_freshness() {
        let entry = CacheEntry::new("<html/>".to_string());
        assert!(entry.is_fresh(3600));

        let old = CacheEntry {
            html: "<html/>".to_string(),
            built_at: now_unix().saturating_sub(100),
        };
        assert!(!old.is_fresh(50));
        assert!(old.is_fresh(200));
        assert!(old.age_secs() >= 100);
    }

    #[tokio::test]
    async fn test_fresh_entry_served_without_rebuild() {
        let cache = PageCache::new();
        insert_aged(&cache, "home", "<p>cached</p>", 0).await;

        let rebuilds = Arc::new(AtomicUsize::new(0));
        let counter = rebuilds.clone();
        let html = cache
            .get_or_rebuild("home", 3600, move || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok("<p>fresh</p>".to_string())
            })
            .await
            .unwrap();

        assert_eq!(html, "<p>cached</p>");
        assert_eq!(rebuilds.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_expired_entry_is_rebuilt() {
        let cache = PageCache::new();
        insert_aged(&cache, "home", "<p>old</p>", 10_000).await;

        let html = cache
            .get_or_rebuild("home", 3600, || async { Ok("<p>new</p>".to_string()) })
            .await
            .unwrap();

        assert_eq!(html, "<p>new</p>");

        // The fresh copy replaced the expired one
        let entries = cache.entries.read().await;
        assert_eq!(entries.get("home").unwrap().html, "<p>new</p>");
        assert!(entries.get("home").unwrap().is_fresh(3600));
    }

    #[tokio::test]
    async fn test_rebuild_failure_serves_stale() {
        let cache = PageCache::new();
        insert_aged(&cache, "home", "<p>stale</p>", 10_000).await;

        let html = cache
            .get_or_rebuild("home", 3600, || async {
                Err(Error::other("feed unreachable"))
            })
            .await
            .unwrap();

        assert_eq!(html, "<p>stale</p>");
    }

    #[tokio::test]
    async fn test_cold_failure_propagates() {
        let cache = PageCache::new();

        let result = cache
            .get_or_rebuild("home", 3600, || async {
                Err(Error::other("feed unreachable"))
            })
            .await;

        assert!(result.is_err());
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_concurrent_cold_requests_rebuild_once() {
        let cache = Arc::new(PageCache::new());
        let rebuilds = Arc::new(AtomicUsize::new(0));

        let mut tasks = Vec::new();
        for _ in 0..4 {
            let cache = cache.clone();
            let rebuilds = rebuilds.clone();
            tasks.push(tokio::spawn(async move {
                cache
                    .get_or_rebuild("home", 3600, move || async move {
                        rebuilds.fetch_add(1, Ordering::SeqCst);
                        tokio::time::sleep(Duration::from_millis(50)).await;
                        Ok("<p>built</p>".to_string())
                    })
                    .await
                    .unwrap()
            }));
        }

        for task in tasks {
            assert_eq!(task.await.unwrap(), "<p>built</p>");
        }
        assert_eq!(rebuilds.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_stale_served_while_rebuild_in_flight() {
        let cache = Arc::new(PageCache::new());
        insert_aged(&cache, "home", "<p>stale</p>", 10_000).await;

        // Occupy the rebuild slot with a slow rebuild of another key
        let slow_cache = cache.clone();
        let slow = tokio::spawn(async move {
            slow_cache
                .get_or_rebuild("episode:slow", 3600, || async {
                    tokio::time::sleep(Duration::from_millis(100)).await;
                    Ok("<p>slow</p>".to_string())
                })
                .await
                .unwrap()
        });

        // Give the slow rebuild time to take the guard
        tokio::time::sleep(Duration::from_millis(20)).await;

        // The expired home page is served as-is instead of waiting
        let html = cache
            .get_or_rebuild("home", 3600, || async {
                panic!("should not rebuild while another rebuild holds the guard")
            })
            .await
            .unwrap();
        assert_eq!(html, "<p>stale</p>");

        assert_eq!(slow.await.unwrap(), "<p>slow</p>");
    }

    #[tokio::test]
    async fn test_invalidate_forces_rebuild() {
        let cache = PageCache::new();
        insert_aged(&cache, "home", "<p>cached</p>", 0).await;

        cache.invalidate("home").await;
        assert!(cache.is_empty().await);

        let html = cache
            .get_or_rebuild("home", 3600, || async { Ok("<p>rebuilt</p>".to_string()) })
            .await
            .unwrap();
        assert_eq!(html, "<p>rebuilt</p>");
        assert_eq!(cache.len().await, 1);
    }
}

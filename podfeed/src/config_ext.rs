//! Extension pour intégrer le flux d'épisodes dans podconfig
//!
//! Ce module fournit le trait `FeedConfigExt` qui permet d'ajouter
//! des méthodes de gestion de la configuration du flux à podconfig::Config.
//!
//! # Exemple
//!
//! ```no_run
//! use podconfig::get_config;
//! use podfeed::FeedConfigExt;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = get_config();
//!
//! let base_url = config.get_feed_base_url()?;
//! let limit = config.get_feed_limit()?;
//! println!("Fetching {} episodes from {}", limit, base_url);
//! # Ok(())
//! # }
//! ```

use crate::client::{DEFAULT_BASE_URL, DEFAULT_EPISODE_LIMIT, DEFAULT_REQUEST_TIMEOUT_SECS};
use anyhow::Result;
use podconfig::Config;
use serde_yaml::Value;

/// Trait d'extension pour gérer la configuration du flux d'épisodes
///
/// # Auto-persist des valeurs par défaut
///
/// Les getters persistent automatiquement les valeurs par défaut dans la
/// configuration si elles n'existent pas encore.
pub trait FeedConfigExt {
    /// Récupère l'URL de base de l'API des épisodes
    fn get_feed_base_url(&self) -> Result<String>;

    /// Définit l'URL de base de l'API des épisodes
    fn set_feed_base_url(&self, url: &str) -> Result<()>;

    /// Récupère le nombre d'épisodes demandés pour les listes
    fn get_feed_limit(&self) -> Result<usize>;

    /// Définit le nombre d'épisodes demandés pour les listes
    fn set_feed_limit(&self, limit: usize) -> Result<()>;

    /// Récupère le timeout des requêtes HTTP (en secondes)
    fn get_feed_timeout_secs(&self) -> Result<u64>;

    /// Définit le timeout des requêtes HTTP (en secondes)
    fn set_feed_timeout_secs(&self, timeout_secs: u64) -> Result<()>;
}

impl FeedConfigExt for Config {
    fn get_feed_base_url(&self) -> Result<String> {
        match self.get_value(&["feed", "base_url"]) {
            Ok(Value::String(s)) if !s.is_empty() => Ok(s),
            _ => {
                // Not set, use default and persist
                self.set_feed_base_url(DEFAULT_BASE_URL)?;
                Ok(DEFAULT_BASE_URL.to_string())
            }
        }
    }

    fn set_feed_base_url(&self, url: &str) -> Result<()> {
        self.set_value(&["feed", "base_url"], Value::String(url.to_string()))
    }

    fn get_feed_limit(&self) -> Result<usize> {
        match self.get_value(&["feed", "limit"]) {
            Ok(Value::Number(n)) => {
                if let Some(limit) = n.as_u64() {
                    Ok(limit as usize)
                } else {
                    self.set_feed_limit(DEFAULT_EPISODE_LIMIT)?;
                    Ok(DEFAULT_EPISODE_LIMIT)
                }
            }
            _ => {
                self.set_feed_limit(DEFAULT_EPISODE_LIMIT)?;
                Ok(DEFAULT_EPISODE_LIMIT)
            }
        }
    }

    fn set_feed_limit(&self, limit: usize) -> Result<()> {
        self.set_value(
            &["feed", "limit"],
            Value::Number(serde_yaml::Number::from(limit)),
        )
    }

    fn get_feed_timeout_secs(&self) -> Result<u64> {
        match self.get_value(&["feed", "timeout_secs"]) {
            Ok(Value::Number(n)) => {
                if let Some(timeout) = n.as_u64() {
                    Ok(timeout)
                } else {
                    self.set_feed_timeout_secs(DEFAULT_REQUEST_TIMEOUT_SECS)?;
                    Ok(DEFAULT_REQUEST_TIMEOUT_SECS)
                }
            }
            _ => {
                self.set_feed_timeout_secs(DEFAULT_REQUEST_TIMEOUT_SECS)?;
                Ok(DEFAULT_REQUEST_TIMEOUT_SECS)
            }
        }
    }

    fn set_feed_timeout_secs(&self, timeout_secs: u64) -> Result<()> {
        self.set_value(
            &["feed", "timeout_secs"],
            Value::Number(serde_yaml::Number::from(timeout_secs)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_persisted() {
        let dir = tempdir().unwrap();
        let config = Config::load_config(dir.path().to_str().unwrap()).unwrap();

        assert_eq!(config.get_feed_base_url().unwrap(), DEFAULT_BASE_URL);
        assert_eq!(config.get_feed_limit().unwrap(), DEFAULT_EPISODE_LIMIT);
        assert_eq!(
            config.get_feed_timeout_secs().unwrap(),
            DEFAULT_REQUEST_TIMEOUT_SECS
        );

        // After the first read the defaults live in the config tree
        assert_eq!(
            config.get_value(&["feed", "limit"]).unwrap(),
            Value::Number(serde_yaml::Number::from(DEFAULT_EPISODE_LIMIT))
        );
    }

    #[test]
    fn test_set_overrides_default() {
        let dir = tempdir().unwrap();
        let config = Config::load_config(dir.path().to_str().unwrap()).unwrap();

        config.set_feed_base_url("http://feeds.example.org").unwrap();
        config.set_feed_limit(4).unwrap();

        assert_eq!(
            config.get_feed_base_url().unwrap(),
            "http://feeds.example.org"
        );
        assert_eq!(config.get_feed_limit().unwrap(), 4);
    }
}

//! Extension pour la configuration des pages dans podconfig
//!
//! Ce module fournit le trait `PagesConfigExt` qui expose les intervalles
//! de revalidation des pages rendues.
//!
//! # Exemple
//!
//! ```no_run
//! use podconfig::get_config;
//! use podpages::PagesConfigExt;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = get_config();
//!
//! let home_ttl = config.get_home_revalidate_secs()?;
//! println!("Home page rebuilt every {}s", home_ttl);
//! # Ok(())
//! # }
//! ```

use anyhow::Result;
use podconfig::Config;
use serde_yaml::Value;

/// Intervalle de revalidation par défaut de la home (8 heures)
pub const DEFAULT_HOME_REVALIDATE_SECS: u64 = 8 * 3600;

/// Intervalle de revalidation par défaut des pages d'épisode (24 heures)
pub const DEFAULT_EPISODE_REVALIDATE_SECS: u64 = 24 * 3600;

/// Trait d'extension pour les intervalles de revalidation des pages
///
/// # Auto-persist des valeurs par défaut
///
/// Les getters persistent automatiquement les valeurs par défaut dans la
/// configuration si elles n'existent pas encore.
pub trait PagesConfigExt {
    /// Récupère l'intervalle de revalidation de la home (en secondes)
    fn get_home_revalidate_secs(&self) -> Result<u64>;

    /// Définit l'intervalle de revalidation de la home (en secondes)
    fn set_home_revalidate_secs(&self, secs: u64) -> Result<()>;

    /// Récupère l'intervalle de revalidation des pages d'épisode (en secondes)
    fn get_episode_revalidate_secs(&self) -> Result<u64>;

    /// Définit l'intervalle de revalidation des pages d'épisode (en secondes)
    fn set_episode_revalidate_secs(&self, secs: u64) -> Result<()>;
}

impl PagesConfigExt for Config {
    fn get_home_revalidate_secs(&self) -> Result<u64> {
        match self.get_value(&["pages", "home_revalidate_secs"]) {
            Ok(Value::Number(n)) => {
                if let Some(secs) = n.as_u64() {
                    Ok(secs)
                } else {
                    self.set_home_revalidate_secs(DEFAULT_HOME_REVALIDATE_SECS)?;
                    Ok(DEFAULT_HOME_REVALIDATE_SECS)
                }
            }
            _ => {
                self.set_home_revalidate_secs(DEFAULT_HOME_REVALIDATE_SECS)?;
                Ok(DEFAULT_HOME_REVALIDATE_SECS)
            }
        }
    }

    fn set_home_revalidate_secs(&self, secs: u64) -> Result<()> {
        self.set_value(
            &["pages", "home_revalidate_secs"],
            Value::Number(serde_yaml::Number::from(secs)),
        )
    }

    fn get_episode_revalidate_secs(&self) -> Result<u64> {
        match self.get_value(&["pages", "episode_revalidate_secs"]) {
            Ok(Value::Number(n)) => {
                if let Some(secs) = n.as_u64() {
                    Ok(secs)
                } else {
                    self.set_episode_revalidate_secs(DEFAULT_EPISODE_REVALIDATE_SECS)?;
                    Ok(DEFAULT_EPISODE_REVALIDATE_SECS)
                }
            }
            _ => {
                self.set_episode_revalidate_secs(DEFAULT_EPISODE_REVALIDATE_SECS)?;
                Ok(DEFAULT_EPISODE_REVALIDATE_SECS)
            }
        }
    }

    fn set_episode_revalidate_secs(&self, secs: u64) -> Result<()> {
        self.set_value(
            &["pages", "episode_revalidate_secs"],
            Value::Number(serde_yaml::Number::from(secs)),
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

        assert_eq!(
            config.get_home_revalidate_secs().unwrap(),
            DEFAULT_HOME_REVALIDATE_SECS
        );
        assert_eq!(
            config.get_episode_revalidate_secs().unwrap(),
            DEFAULT_EPISODE_REVALIDATE_SECS
        );

        assert_eq!(
            config.get_value(&["pages", "home_revalidate_secs"]).unwrap(),
            Value::Number(serde_yaml::Number::from(DEFAULT_HOME_REVALIDATE_SECS))
        );
    }

    #[test]
    fn test_set_overrides_default() {
        let dir = tempdir().unwrap();
        let config = Config::load_config(dir.path().to_str().unwrap()).unwrap();

        config.set_home_revalidate_secs(60).unwrap();
        config.set_episode_revalidate_secs(120).unwrap();

        assert_eq!(config.get_home_revalidate_secs().unwrap(), 60);
        assert_eq!(config.get_episode_revalidate_secs().unwrap(), 120);
    }
}

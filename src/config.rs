use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{Dirs, Language};

/// A configuration used for the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Location of the dataset, if not the default one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,
    /// Language used when none is specified.
    #[serde(default = "default_language")]
    pub language: Language,
}

fn default_language() -> Language {
    Language::Catalan
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: None,
            language: default_language(),
        }
    }
}

impl Config {
    /// Load the configuration, falling back to defaults if there is no
    /// configuration file.
    pub fn load(dirs: &Dirs) -> Result<Self> {
        let config_path = dirs.config_path();

        let config = if config_path.exists() {
            let data = std::fs::read_to_string(&config_path)
                .with_context(|| config_path.display().to_string())?;
            Self::parse(&data).with_context(|| config_path.display().to_string())?
        } else {
            tracing::debug!(path = %config_path.display(), "No configuration file");
            Self::default()
        };

        Ok(config)
    }

    /// Parse a configuration from TOML.
    pub fn parse(data: &str) -> Result<Self> {
        Ok(toml::from_str(data)?)
    }

    /// The dataset to open, preferring an explicit override.
    pub fn database_path(&self, dirs: &Dirs) -> PathBuf {
        match &self.database {
            Some(path) => path.clone(),
            None => dirs.dataset_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
        assert_eq!(Config::default().language, Language::Catalan);
    }

    #[test]
    fn parses_overrides() {
        let config = Config::parse(
            r#"
            database = "/usr/share/conjucat/verb_conjugations.db"
            language = "Spanish"
            "#,
        )
        .unwrap();

        assert_eq!(config.language, Language::Spanish);
        assert_eq!(
            config.database.as_deref(),
            Some(std::path::Path::new("/usr/share/conjucat/verb_conjugations.db"))
        );
    }

    #[test]
    fn rejects_unknown_language() {
        assert!(Config::parse(r#"language = "French""#).is_err());
    }
}

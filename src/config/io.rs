//! Configuration file I/O operations

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::EngineConfig;
use crate::fsio;

impl EngineConfig {
    /// Get the global config directory path (~/.workhome/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".workhome")
    }

    /// Get the global config file path (~/.workhome/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load from `path` if given, else from the global location.
    ///
    /// A missing global file yields the defaults; a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        let global_path = Self::global_config_path();
        if global_path.exists() {
            Self::from_file(&global_path)
        } else {
            tracing::debug!(
                "No config at {}, using defaults",
                global_path.display()
            );
            Ok(Self::default())
        }
    }

    /// Write a hand-edited config text, comments included.
    ///
    /// The text must parse into a valid config. Concurrent writers are
    /// serialized on `<path>.lock` and readers never see a partial file.
    pub fn write_template(path: &Path, content: &str) -> Result<Self> {
        let config = Self::parse(content).with_context(|| "Refusing to write invalid config")?;

        let mut lock_name = path.as_os_str().to_owned();
        lock_name.push(".lock");
        let _lock = fsio::lock_exclusive(Path::new(&lock_name))?;

        fsio::write_atomic(path, content.as_bytes())?;
        tracing::debug!("Wrote config to {}", path.display());
        Ok(config)
    }

    fn parse(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_template_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");

        let written =
            EngineConfig::write_template(&path, "# tuned\ncompletion_bonus = 75\n").unwrap();
        assert_eq!(written.completion_bonus, 75);

        let loaded = EngineConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(loaded, written);
        assert!(std::fs::read_to_string(&path).unwrap().starts_with("# tuned"));
        assert!(!dir.path().join("nested/config.toml.tmp").exists());
    }

    #[test]
    fn test_write_template_rejects_invalid_text() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        assert!(EngineConfig::write_template(&path, "points_per_level = 0\n").is_err());
        assert!(EngineConfig::write_template(&path, "night_owl_hour = \"late\"\n").is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempdir().unwrap();
        assert!(EngineConfig::load(Some(dir.path().join("missing.toml").as_path())).is_err());
    }

    #[test]
    fn test_invalid_values_rejected_on_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "points_per_level = 0\n").unwrap();
        let err = EngineConfig::from_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("points_per_level"));
    }
}

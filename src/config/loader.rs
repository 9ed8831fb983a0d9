use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::Config;
use crate::playback::{MAX_SPEED, MIN_SPEED};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    Validation { message: String },
}

impl Config {
    /// Returns the path to the default configuration file.
    ///
    /// `dirs::config_dir()/bsearch-viz/config.toml`, falling back to the
    /// current directory when no config dir is known.
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("bsearch-viz").join("config.toml")
    }

    /// Loads configuration from `path`, or from [`Config::default_path`].
    ///
    /// - A missing default file yields `Config::default()`.
    /// - A missing explicit file is a read error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::default_path(), false),
        };

        if !explicit && !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::Read {
            path: path.clone(),
            source: e,
        })?;

        Self::from_toml(&content).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse { path, source },
            other => other,
        })
    }

    /// Parses and validates TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let generator = &self.generator;
        if generator.length == 0 {
            return Err(ConfigError::Validation {
                message: "generator.length must be at least 1".to_string(),
            });
        }
        if generator.min >= generator.max {
            return Err(ConfigError::Validation {
                message: format!(
                    "generator.min ({}) must be below generator.max ({})",
                    generator.min, generator.max
                ),
            });
        }

        let playback = &self.playback;
        if !(MIN_SPEED..=MAX_SPEED).contains(&playback.speed) {
            return Err(ConfigError::Validation {
                message: format!(
                    "playback.speed ({}) must be within {}..={}",
                    playback.speed, MIN_SPEED, MAX_SPEED
                ),
            });
        }
        if playback.speed_step == 0 {
            return Err(ConfigError::Validation {
                message: "playback.speed_step must be positive".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_tables() {
        let config = Config::from_toml("[generator]\nseed = 9\nlength = 4\n").unwrap();

        assert_eq!(config.generator.seed, Some(9));
        assert_eq!(config.generator.length, 4);
        assert_eq!(config.generator.max, 100);
        assert_eq!(config.playback.speed, 1000);
    }

    #[test]
    fn test_rejects_inverted_range() {
        let err = Config::from_toml("[generator]\nmin = 10\nmax = 10\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation { .. }));
    }

    #[test]
    fn test_rejects_speed_out_of_range() {
        let err = Config::from_toml("[playback]\nspeed = 4000\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation { .. }));
    }

    #[test]
    fn test_rejects_bad_toml() {
        let err = Config::from_toml("[playback\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[playback]\nspeed = 2500\nspeed_step = 100").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.playback.speed, 2500);
        assert_eq!(config.playback.speed_step, 100);
    }

    #[test]
    fn test_load_parse_error_names_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not toml at all = = =").unwrap();

        match Config::load(Some(file.path())) {
            Err(ConfigError::Parse { path, .. }) => assert_eq!(path, file.path()),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        assert!(matches!(
            Config::load(Some(missing.as_path())),
            Err(ConfigError::Read { .. })
        ));
    }
}

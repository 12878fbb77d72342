//! Configuration management module.
//!
//! This module handles loading and saving application configuration,
//! currently just the base URL of the restaurant service.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/restaurant-list";

/// Base URL of the reference backend, used when no configuration file
/// overrides it.
const DEFAULT_BASE_URL: &str =
    "https://outside-in-dev-api.herokuapp.com/qt0N6znIaEP5hYGXOYfUWoIvjvz3Lzvo";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: String,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Config {
    /// Return a new instance with default values.
    ///
    pub fn new() -> Config {
        Config {
            base_url: default_base_url(),
            file_path: None,
        }
    }

    /// Return the default configuration directory path.
    ///
    fn default_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeDirectoryNotFound)?;
        Ok(home.join(DEFAULT_DIRECTORY_PATH))
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided. A missing file leaves the defaults in place
    /// and records where a later save should write.
    ///
    pub fn load(&mut self, custom_path: Option<&Path>) -> Result<(), AppError> {
        let dir_path = match custom_path {
            Some(path) => path.to_path_buf(),
            None => Config::default_path()?,
        };

        // Try to create dir path if it doesn't exist
        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;

        if file_path.exists() {
            let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.base_url = data.base_url;
        }

        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            base_url: self.base_url.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_config_dir() -> PathBuf {
        std::env::temp_dir().join(format!("restaurant-list-test-{}", Uuid::new_v4()))
    }

    #[test]
    fn load_without_file_keeps_defaults() {
        let dir = temp_config_dir();
        let mut config = Config::new();
        config.load(Some(&dir)).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn save_then_load_round_trips_base_url() {
        let dir = temp_config_dir();
        let mut config = Config::new();
        config.load(Some(&dir)).unwrap();
        config.base_url = "http://localhost:3000".to_string();
        config.save().unwrap();

        let mut reloaded = Config::new();
        reloaded.load(Some(&dir)).unwrap();
        assert_eq!(reloaded.base_url, "http://localhost:3000");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn save_before_load_fails_without_file_path() {
        let config = Config::new();
        let result = config.save();
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::FilePathNotSet))
        ));
    }

    #[test]
    fn load_with_malformed_file_fails() {
        let dir = temp_config_dir();
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "base_url: [not: a: string").unwrap();

        let mut config = Config::new();
        let result = config.load(Some(&dir));
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::DeserializationFailed(_)))
        ));
        fs::remove_dir_all(&dir).unwrap();
    }
}

//! Configuration file handling

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::dialect::SqlDialect;
use crate::error::{Error, Result};

/// File looked up by [`CompareConfig::find_and_load`]
pub const CONFIG_FILE_NAME: &str = "sqlcompare.toml";

/// Configuration for comparing schemas
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Dialect used to tokenize both inputs
    #[serde(default)]
    pub dialect: SqlDialect,
}

impl CompareConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })
    }

    /// Try to find and load sqlcompare.toml in current directory or parent directories
    pub fn find_and_load() -> Result<Option<Self>> {
        let current_dir = std::env::current_dir().map_err(|source| Error::Io {
            path: PathBuf::from("."),
            source,
        })?;
        Self::find_from(&current_dir)
    }

    /// Look for sqlcompare.toml in `start` and its ancestors
    pub fn find_from(start: &Path) -> Result<Option<Self>> {
        for dir in start.ancestors() {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.is_file() {
                return Self::from_file(&config_path).map(Some);
            }
        }
        Ok(None)
    }
}

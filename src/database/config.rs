//! Archive configuration file support
//!
//! Handles parsing of `.transana-archive.toml` configuration files and
//! environment variable overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{DatabaseError, DatabaseResult};

/// Default database filename
pub const DEFAULT_DATABASE_FILENAME: &str = "transana.duckdb";

/// Default configuration filename
pub const CONFIG_FILENAME: &str = ".transana-archive.toml";

/// Environment variable overriding the database path
pub const ENV_DATABASE_PATH: &str = "TRANSANA_ARCHIVE_DATABASE";

/// Database configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSection {
    /// Path to the database file (relative to the working directory)
    #[serde(default = "default_database_path")]
    pub path: String,
}

fn default_database_path() -> String {
    DEFAULT_DATABASE_FILENAME.to_string()
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

/// Export configuration section
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExportSection {
    /// Resolve bare destination names under the home directory.
    /// Unset means the platform rule (on by default on macOS only).
    #[serde(default)]
    pub home_fallback: Option<bool>,
}

/// Main configuration structure
///
/// Represents the `.transana-archive.toml` configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ArchiveConfig {
    /// Database configuration
    #[serde(default)]
    pub database: DatabaseSection,

    /// Export configuration
    #[serde(default)]
    pub export: ExportSection,
}

impl ArchiveConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a directory
    ///
    /// Looks for `.transana-archive.toml` in the directory and falls back to
    /// defaults if absent; environment overrides are applied either way.
    pub fn load(dir: &Path) -> DatabaseResult<Self> {
        let config_path = dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .map_err(|e| DatabaseError::IoError(format!("Failed to read config: {}", e)))?;

            Self::parse(&content)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> DatabaseResult<Self> {
        toml::from_str(content)
            .map_err(|e| DatabaseError::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to a directory
    pub fn save(&self, dir: &Path) -> DatabaseResult<()> {
        let config_path = dir.join(CONFIG_FILENAME);
        let content = self.to_toml()?;

        std::fs::write(&config_path, content)
            .map_err(|e| DatabaseError::IoError(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Convert configuration to TOML string
    pub fn to_toml(&self) -> DatabaseResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| DatabaseError::ConfigError(format!("Failed to serialize config: {}", e)))
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        self.apply_env_from(|name| std::env::var(name).ok());
    }

    /// Apply overrides from an environment lookup
    fn apply_env_from(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(path) = env(ENV_DATABASE_PATH) {
            self.database.path = path;
        }
    }

    /// Get the database path, resolved against `dir` when relative
    pub fn database_path(&self, dir: &Path) -> PathBuf {
        if self.database.path.is_empty() {
            dir.join(DEFAULT_DATABASE_FILENAME)
        } else if Path::new(&self.database.path).is_absolute() {
            PathBuf::from(&self.database.path)
        } else {
            dir.join(&self.database.path)
        }
    }

    /// Whether bare destination names resolve under the home directory
    pub fn home_fallback(&self) -> bool {
        self.export
            .home_fallback
            .unwrap_or(cfg!(target_os = "macos"))
    }

    /// Check if configuration exists in a directory
    pub fn exists(dir: &Path) -> bool {
        dir.join(CONFIG_FILENAME).exists()
    }
}

/// Generate a sample configuration file content
pub fn sample_config() -> &'static str {
    r#"# Transana Archive Configuration

[database]
# Path to the DuckDB database file (relative to this directory, or absolute)
path = "transana.duckdb"

[export]
# Resolve bare destination names under the home directory.
# Defaults to the platform rule (enabled on macOS).
# home_fallback = false
"#
}

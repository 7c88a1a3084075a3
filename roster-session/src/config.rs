//! Roster configuration, read from `roster.toml`.
//!
//! ```toml
//! [labels]
//! create = "Thêm sinh viên"
//! update = "Cập nhật sinh viên"
//! duplicate-notice = "Mã SV đã tồn tại"
//!
//! [logging]
//! filter = "roster_store=debug,info"
//! ```
//!
//! Every key is optional; missing keys take their defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Default file name looked up by the CLI.
pub const DEFAULT_CONFIG_FILE: &str = "roster.toml";

/// User-facing strings that depend on session state or outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Labels {
    /// Submit button label while creating.
    pub create: String,
    /// Submit button label while editing.
    pub update: String,
    /// Blocking notice shown when a student id is already taken.
    pub duplicate_notice: String,
    /// Notice shown when the record being edited no longer exists.
    pub missing_notice: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            create: "Thêm sinh viên".to_string(),
            update: "Cập nhật sinh viên".to_string(),
            duplicate_notice: "Mã SV đã tồn tại".to_string(),
            missing_notice: "Không tìm thấy sinh viên".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directives.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub labels: Labels,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl RosterConfig {
    /// Parse a TOML document.
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Loads config from `path` if it exists.
    /// Falls back to defaults with a warning on read or parse errors.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No config file found at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(config) => {
                    info!("Loaded roster config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!(
                        "Failed to parse config file {:?}: {}. Falling back to defaults.",
                        path, e
                    );
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }
}

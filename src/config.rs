use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable overriding `catalog.base_url`.
pub const CATALOG_URL_ENV: &str = "STATBLOCK_CATALOG_URL";

const APP_DIR: &str = "ttrpg-statblock";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

/// Remote creature catalog settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Root of the SRD data set; `monsters.json` is fetched from here.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset, e.g. `"info"` or `"ttrpg_statblock=debug"`.
    pub level: String,
    /// Also write JSON logs to a daily rolling file.
    pub file_enabled: bool,
    /// Override the log directory.
    pub log_dir: Option<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "https://5e-bits.github.io/data".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file_enabled: false,
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/ttrpg-statblock/config.toml`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, with the same fallback rules
    /// as [`AppConfig::load`]. Environment overrides are applied last.
    pub fn load_from(config_path: &Path) -> Self {
        let mut config = match std::fs::read_to_string(config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    log::info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    log::warn!(
                        "Failed to parse config at {}: {e}; using defaults",
                        config_path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::debug!("No config file at {}; using defaults", config_path.display());
                Self::default()
            }
        };

        config.apply_env_overrides(std::env::var(CATALOG_URL_ENV).ok());
        config
    }

    fn apply_env_overrides(&mut self, catalog_url: Option<String>) {
        if let Some(url) = catalog_url.filter(|u| !u.trim().is_empty()) {
            log::debug!("Catalog base URL overridden by {}", CATALOG_URL_ENV);
            self.catalog.base_url = url.trim().to_string();
        }
    }

    /// Resolved log directory (override or XDG data default).
    pub fn log_dir(&self) -> PathBuf {
        self.logging.log_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join(APP_DIR).join("logs"))
                .unwrap_or_else(|| PathBuf::from("logs"))
        })
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}

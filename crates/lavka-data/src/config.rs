//! # Catalog Configuration
//!
//! Configuration management for the catalog layer.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     LAVKA_CATALOG_PATH=./data/products.json                            │
//! │     LAVKA_CURRENCY_SUFFIX=RUB                                          │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/lavka/lavka.toml (Linux)                                 │
//! │     ~/Library/Application Support/ru.lavka.catalog/lavka.toml (macOS)  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     data/products.json, Russian retail labels                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # lavka.toml
//! [catalog]
//! path = "data/products.json"
//!
//! [display]
//! currency_suffix = "руб."
//! stock_label = "Остаток"
//! unit_suffix = "шт."
//! empty_category_text = "Нет продуктов в категории."
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use lavka_core::SummaryStyle;

use crate::error::{DataError, DataResult};

/// Environment variable overriding the catalog document path.
pub const ENV_CATALOG_PATH: &str = "LAVKA_CATALOG_PATH";

/// Environment variable overriding the currency suffix label.
pub const ENV_CURRENCY_SUFFIX: &str = "LAVKA_CURRENCY_SUFFIX";

// =============================================================================
// Catalog Section
// =============================================================================

/// `[catalog]` — where the catalog document lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSection {
    /// Path to the catalog JSON document.
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("data/products.json")
}

impl Default for CatalogSection {
    fn default() -> Self {
        CatalogSection {
            path: default_catalog_path(),
        }
    }
}

// =============================================================================
// Catalog Config
// =============================================================================

/// Full configuration: the catalog location plus the listing labels.
///
/// The `[display]` section IS a [`SummaryStyle`]; its serde defaults fill in
/// any label the file omits.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Where the catalog document lives.
    #[serde(default)]
    pub catalog: CatalogSection,

    /// Labels for product summaries and category listings.
    #[serde(default)]
    pub display: SummaryStyle,
}

impl CatalogConfig {
    /// Loads configuration: defaults ← file ← environment.
    ///
    /// With `path = None` the platform config location is probed; a missing
    /// file there is fine (defaults apply). An EXPLICIT path that is missing
    /// or malformed is an error — the caller asked for that file.
    pub fn load(path: Option<&Path>) -> DataResult<Self> {
        let mut config = match path {
            Some(explicit) => Self::from_file(explicit)?,
            None => match Self::default_config_path() {
                Some(probed) if probed.exists() => Self::from_file(&probed)?,
                _ => {
                    debug!("no config file found, using defaults");
                    CatalogConfig::default()
                }
            },
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Like [`load`](CatalogConfig::load) with no explicit path, but never
    /// fails: any error is logged and replaced with the defaults.
    pub fn load_or_default() -> Self {
        match Self::load(None) {
            Ok(config) => config,
            Err(err) => {
                warn!(error = %err, "config load failed, falling back to defaults");
                CatalogConfig::default()
            }
        }
    }

    /// Parses a TOML config file.
    fn from_file(path: &Path) -> DataResult<Self> {
        let content = fs::read_to_string(path).map_err(|err| DataError::from_io(path, err))?;
        let config = toml::from_str(&content)?;
        debug!(path = %path.display(), "config file loaded");
        Ok(config)
    }

    /// Applies environment variable overrides on top of the parsed values.
    fn apply_env_overrides(&mut self) {
        if let Ok(path) = env::var(ENV_CATALOG_PATH) {
            debug!(%path, "catalog path overridden from environment");
            self.catalog.path = PathBuf::from(path);
        }

        if let Ok(suffix) = env::var(ENV_CURRENCY_SUFFIX) {
            self.display.currency_suffix = suffix;
        }
    }

    /// Checks the merged configuration.
    pub fn validate(&self) -> DataResult<()> {
        if self.catalog.path.as_os_str().is_empty() {
            return Err(DataError::InvalidConfig {
                reason: "catalog path must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Platform-correct location of the config file, when resolvable.
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("ru", "lavka", "lavka").map(|dirs| dirs.config_dir().join("lavka.toml"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! Engine configuration via `displayname.toml`
//!
//! Selects the strategy used when no class in an artifact's chain declares
//! one. Without a file, or with an empty one, that is the default style.

use crate::catalog::StrategyCatalog;
use displayname_core::{Error, Result, StrategyConfig, Style};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name looked up next to the test sources.
pub const CONFIG_FILE_NAME: &str = "displayname.toml";

/// Engine configuration loaded from `displayname.toml`.
///
/// # Example
///
/// ```toml
/// # Fallback strategy: "default", "underscore" or a registered custom name
/// default_generator = "underscore"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Name of the fallback strategy, looked up in the `StrategyCatalog`.
    #[serde(default = "default_generator_str")]
    pub default_generator: String,
}

fn default_generator_str() -> String {
    Style::Default.as_str().to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_generator: default_generator_str(),
        }
    }
}

impl EngineConfig {
    /// Config selecting a built-in style as fallback
    pub fn with_default_style(style: Style) -> Self {
        Self {
            default_generator: style.as_str().to_string(),
        }
    }

    /// Resolve the fallback strategy against a catalog.
    ///
    /// # Errors
    ///
    /// Returns `UnknownStrategy` if the name is not in the catalog.
    pub fn fallback(&self, catalog: &StrategyCatalog) -> Result<StrategyConfig> {
        catalog.lookup(self.default_generator.trim())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Display name configuration
#
# Strategy used for classes and methods when no class in the chain
# declares one:
#   "default"    = identifiers as declared, methods as name(ParamType)
#   "underscore" = like "default" with every '_' replaced by a space
# Any other value must be the name of a strategy registered with the engine.
default_generator = "default"
"#
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the text is not valid configuration.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)
            .map_err(|e| Error::config(format!("Failed to parse config: {}", e)))?;
        if config.default_generator.trim().is_empty() {
            return Err(Error::config("default_generator cannot be blank"));
        }
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config(msg) => Error::config(format!("{} ({})", msg, path.display())),
            other => other,
        })
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            Error::config(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

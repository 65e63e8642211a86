//! Strategy catalog
//!
//! Maps strategy names to configurations so that text configuration
//! (`displayname.toml`) can refer to custom strategies. The built-in styles
//! are always present under their style names.

use displayname_core::{Error, NamingStrategy, Result, StrategyConfig, Style};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::info;

/// Named strategies available to configuration
#[derive(Debug, Clone)]
pub struct StrategyCatalog {
    entries: FxHashMap<String, StrategyConfig>,
}

impl Default for StrategyCatalog {
    fn default() -> Self {
        let entries = Style::ALL
            .into_iter()
            .map(|style| (style.as_str().to_string(), StrategyConfig::Style(style)))
            .collect();
        Self { entries }
    }
}

impl StrategyCatalog {
    /// Catalog holding the built-in styles only
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a custom strategy under its own `name()`
    ///
    /// # Errors
    ///
    /// Returns `DuplicateStrategy` if the name is taken, including by a
    /// built-in style.
    pub fn register(&mut self, strategy: Arc<dyn NamingStrategy>) -> Result<()> {
        let name = strategy.name().to_string();
        if self.entries.contains_key(&name) {
            return Err(Error::DuplicateStrategy(name));
        }
        info!(strategy = %name, "Registered naming strategy");
        self.entries.insert(name, StrategyConfig::Custom(strategy));
        Ok(())
    }

    /// Look up a strategy by name
    ///
    /// # Errors
    ///
    /// Returns `UnknownStrategy` if nothing is registered under `name`.
    pub fn lookup(&self, name: &str) -> Result<StrategyConfig> {
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UnknownStrategy(name.to_string()))
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

//! Naming strategies
//!
//! A naming strategy turns class and method identifiers into display names.
//! Two styles are built in:
//!
//! | Style | Class | Method |
//! |-------|-------|--------|
//! | `default` | identifier as declared | `name(ParamType, ...)` |
//! | `underscore` | every `_` becomes one space | same, on the method name only |
//!
//! Anything else implements [`NamingStrategy`] and is attached through
//! [`StrategyConfig::Custom`].

use crate::model::{ClassRecord, MethodSignature};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// Result type for strategy operations
pub type StrategyResult<T> = std::result::Result<T, StrategyError>;

/// Failure raised by a naming strategy
///
/// The built-in styles never fail. Custom strategies return this when they
/// cannot produce a name; the engine hands it back to the caller untouched.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct StrategyError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl StrategyError {
    /// Create an error with a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Create an error caused by another error
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// The error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Generates display names for classes, nested classes and methods
///
/// Implementations must be pure: the same input always yields the same
/// name, and no state is shared between calls. They are invoked from any
/// thread.
pub trait NamingStrategy: Send + Sync + fmt::Debug {
    /// Short name used in logs and configuration
    fn name(&self) -> &str;

    /// Display name for a top-level class
    fn name_for_class(&self, class: &ClassRecord) -> StrategyResult<String>;

    /// Display name for a nested class
    fn name_for_nested_class(&self, nested: &ClassRecord) -> StrategyResult<String>;

    /// Display name for a method of the test class `class`
    fn name_for_method(&self, class: &ClassRecord, method: &MethodSignature)
        -> StrategyResult<String>;
}

/// Identifiers as declared, methods with their parameter list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultStyle;

impl NamingStrategy for DefaultStyle {
    fn name(&self) -> &str {
        Style::Default.as_str()
    }

    fn name_for_class(&self, class: &ClassRecord) -> StrategyResult<String> {
        Ok(class.name().to_string())
    }

    fn name_for_nested_class(&self, nested: &ClassRecord) -> StrategyResult<String> {
        Ok(nested.name().to_string())
    }

    fn name_for_method(
        &self,
        _class: &ClassRecord,
        method: &MethodSignature,
    ) -> StrategyResult<String> {
        Ok(format!("{}({})", method.name(), method.parameter_list()))
    }
}

/// Default style with every underscore in the identifier replaced by a space
///
/// Each `_` maps to exactly one space; runs of underscores are not
/// collapsed. The parameter list of a method is left untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnderscoreStyle;

impl UnderscoreStyle {
    fn replace_underscores(name: &str) -> String {
        name.replace('_', " ")
    }
}

impl NamingStrategy for UnderscoreStyle {
    fn name(&self) -> &str {
        Style::Underscore.as_str()
    }

    fn name_for_class(&self, class: &ClassRecord) -> StrategyResult<String> {
        Ok(Self::replace_underscores(class.name().as_str()))
    }

    fn name_for_nested_class(&self, nested: &ClassRecord) -> StrategyResult<String> {
        Ok(Self::replace_underscores(nested.name().as_str()))
    }

    fn name_for_method(
        &self,
        _class: &ClassRecord,
        method: &MethodSignature,
    ) -> StrategyResult<String> {
        Ok(format!(
            "{}({})",
            Self::replace_underscores(method.name().as_str()),
            method.parameter_list()
        ))
    }
}

static DEFAULT_STYLE: Lazy<Arc<dyn NamingStrategy>> = Lazy::new(|| Arc::new(DefaultStyle));
static UNDERSCORE_STYLE: Lazy<Arc<dyn NamingStrategy>> = Lazy::new(|| Arc::new(UnderscoreStyle));

/// Built-in naming styles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// See [`DefaultStyle`]
    #[default]
    Default,
    /// See [`UnderscoreStyle`]
    Underscore,
}

impl Style {
    /// All built-in styles
    pub const ALL: [Style; 2] = [Style::Default, Style::Underscore];

    /// Configuration name of the style
    pub const fn as_str(self) -> &'static str {
        match self {
            Style::Default => "default",
            Style::Underscore => "underscore",
        }
    }

    /// Shared strategy instance for this style
    ///
    /// Every call returns a clone of the same `Arc`.
    pub fn strategy(self) -> Arc<dyn NamingStrategy> {
        match self {
            Style::Default => Arc::clone(&DEFAULT_STYLE),
            Style::Underscore => Arc::clone(&UNDERSCORE_STYLE),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| format!("unknown style '{}'", s))
    }
}

/// Strategy configuration attached to a class
///
/// Either one of the built-in styles or a custom strategy instance.
#[derive(Clone, Debug)]
pub enum StrategyConfig {
    /// A built-in style
    Style(Style),
    /// A user-supplied strategy
    Custom(Arc<dyn NamingStrategy>),
}

impl StrategyConfig {
    /// Wrap a custom strategy
    pub fn custom<S: NamingStrategy + 'static>(strategy: S) -> Self {
        StrategyConfig::Custom(Arc::new(strategy))
    }

    /// The strategy this configuration selects
    pub fn strategy(&self) -> Arc<dyn NamingStrategy> {
        match self {
            StrategyConfig::Style(style) => style.strategy(),
            StrategyConfig::Custom(strategy) => Arc::clone(strategy),
        }
    }

    /// Name of the selected strategy
    pub fn name(&self) -> &str {
        match self {
            StrategyConfig::Style(style) => style.as_str(),
            StrategyConfig::Custom(strategy) => strategy.name(),
        }
    }
}

impl Default for StrategyConfig {
    fn default() -> Self {
        StrategyConfig::Style(Style::Default)
    }
}

impl From<Style> for StrategyConfig {
    fn from(style: Style) -> Self {
        StrategyConfig::Style(style)
    }
}

impl PartialEq for StrategyConfig {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (StrategyConfig::Style(a), StrategyConfig::Style(b)) => a == b,
            (StrategyConfig::Custom(a), StrategyConfig::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

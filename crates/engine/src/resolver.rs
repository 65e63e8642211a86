//! Strategy resolution
//!
//! Finds the strategy configuration that applies to a class. The walk
//! visits, in order:
//!
//! 1. the class itself
//! 2. its superclasses, nearest first
//! 3. its enclosing class, then that class's superclasses
//! 4. further enclosing classes, each with its superclasses
//!
//! The first configuration found wins. When nothing is found the resolver
//! uses its fallback, which is the default style unless configured
//! otherwise.

use crate::registry::ClassRegistry;
use displayname_core::{Artifact, ClassId, NamingStrategy, Result, StrategyConfig};
use std::sync::Arc;
use tracing::debug;

/// Where a resolved configuration was declared
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionSource {
    /// Declared on this class
    Declared(ClassId),
    /// No class in the chain declares one
    Fallback,
}

/// Outcome of resolving a class
#[derive(Debug, Clone)]
pub struct Resolution {
    config: StrategyConfig,
    source: ResolutionSource,
}

impl Resolution {
    /// The winning configuration
    pub fn config(&self) -> &StrategyConfig {
        &self.config
    }

    /// The strategy to generate names with
    pub fn strategy(&self) -> Arc<dyn NamingStrategy> {
        self.config.strategy()
    }

    /// Where the configuration came from
    pub fn source(&self) -> &ResolutionSource {
        &self.source
    }
}

/// Resolves the effective strategy for classes in a registry
#[derive(Debug, Clone)]
pub struct StrategyResolver {
    registry: Arc<ClassRegistry>,
    fallback: StrategyConfig,
}

impl StrategyResolver {
    /// Resolver falling back to the default style
    pub fn new(registry: Arc<ClassRegistry>) -> Self {
        Self {
            registry,
            fallback: StrategyConfig::default(),
        }
    }

    /// Replace the fallback configuration
    pub fn with_fallback(mut self, fallback: StrategyConfig) -> Self {
        self.fallback = fallback;
        self
    }

    /// The registry being walked
    pub fn registry(&self) -> &ClassRegistry {
        &self.registry
    }

    /// The configuration used when nothing is declared
    pub fn fallback(&self) -> &StrategyConfig {
        &self.fallback
    }

    /// Resolve the strategy for an artifact's class
    ///
    /// For methods this is the declaring class.
    ///
    /// # Errors
    ///
    /// - `MalformedArtifact` if the artifact fails validation
    /// - `UnknownClass` if its class is not registered
    pub fn resolve(&self, artifact: &Artifact) -> Result<Resolution> {
        artifact.validate()?;
        self.resolve_class(artifact.class_id())
    }

    /// Resolve the strategy for a registered class
    ///
    /// # Errors
    ///
    /// Returns `UnknownClass` if the class is not registered.
    pub fn resolve_class(&self, id: &ClassId) -> Result<Resolution> {
        let start = self.registry.get(id)?;

        let declared = self
            .registry
            .lexical_chain(start)
            .flat_map(|level| self.registry.superclass_chain(level))
            .find_map(|class| class.configuration().map(|config| (class.id(), config)));

        let resolution = match declared {
            Some((owner, config)) => Resolution {
                config: config.clone(),
                source: ResolutionSource::Declared(owner.clone()),
            },
            None => Resolution {
                config: self.fallback.clone(),
                source: ResolutionSource::Fallback,
            },
        };

        debug!(
            class = %id,
            strategy = resolution.config.name(),
            source = ?resolution.source,
            "Resolved naming strategy"
        );
        Ok(resolution)
    }
}

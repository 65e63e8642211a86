//! Display name assembly
//!
//! Turns an artifact into the label shown in reports:
//!
//! 1. A non-blank explicit label is returned as declared.
//! 2. Otherwise the strategy resolved for the artifact's class generates
//!    the name, using the operation matching the artifact kind.
//!
//! Strategy failures are returned as they were raised. There is no
//! placeholder and no retry.

use crate::catalog::StrategyCatalog;
use crate::config::EngineConfig;
use crate::registry::ClassRegistry;
use crate::resolver::StrategyResolver;
use displayname_core::{Artifact, ArtifactKind, DescriptorType, Error, Result};
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

/// Reporting category plus display name of one artifact
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Descriptor {
    /// Container or test
    pub descriptor_type: DescriptorType,
    /// Assembled display name
    pub display_name: String,
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.descriptor_type, self.display_name)
    }
}

/// Computes display names for discovered artifacts
///
/// Holds no mutable state; one assembler can be shared across threads.
#[derive(Debug, Clone)]
pub struct DisplayNameAssembler {
    resolver: StrategyResolver,
}

impl DisplayNameAssembler {
    /// Assembler over `registry`, falling back to the default style
    pub fn new(registry: Arc<ClassRegistry>) -> Self {
        Self {
            resolver: StrategyResolver::new(registry),
        }
    }

    /// Assembler over `registry` with the fallback taken from `config`
    ///
    /// # Errors
    ///
    /// Returns `UnknownStrategy` if the configured generator is not in
    /// `catalog`.
    pub fn with_config(
        registry: Arc<ClassRegistry>,
        config: &EngineConfig,
        catalog: &StrategyCatalog,
    ) -> Result<Self> {
        let fallback = config.fallback(catalog)?;
        info!(fallback = fallback.name(), "Configured display name fallback");
        Ok(Self {
            resolver: StrategyResolver::new(registry).with_fallback(fallback),
        })
    }

    /// The underlying resolver
    pub fn resolver(&self) -> &StrategyResolver {
        &self.resolver
    }

    /// Compute the display name of an artifact
    ///
    /// # Errors
    ///
    /// - `MalformedArtifact` if the artifact fails validation
    /// - `UnknownClass` if its class is not registered
    /// - `Strategy` if the resolved strategy fails
    pub fn assemble(&self, artifact: &Artifact) -> Result<String> {
        artifact.validate()?;

        if let Some(label) = artifact.explicit_label() {
            if !label.trim().is_empty() {
                return Ok(label.to_string());
            }
            warn!(
                class = %artifact.class_id(),
                kind = ?artifact.kind(),
                "Ignoring blank explicit label"
            );
        }

        let class = self.resolver.registry().get(artifact.class_id())?;
        let strategy = self.resolver.resolve_class(artifact.class_id())?.strategy();

        let name = match artifact.kind() {
            ArtifactKind::Class => strategy.name_for_class(class)?,
            ArtifactKind::NestedClass => strategy.name_for_nested_class(class)?,
            ArtifactKind::Method => {
                let method = artifact.method_signature().ok_or_else(|| {
                    Error::malformed(format!(
                        "method artifact in class '{}' has no method signature",
                        artifact.class_id()
                    ))
                })?;
                strategy.name_for_method(class, method)?
            }
        };
        Ok(name)
    }

    /// Compute the reporting descriptor of an artifact
    ///
    /// # Errors
    ///
    /// Same as [`assemble`](Self::assemble).
    pub fn describe(&self, artifact: &Artifact) -> Result<Descriptor> {
        Ok(Descriptor {
            descriptor_type: artifact.kind().descriptor_type(),
            display_name: self.assemble(artifact)?,
        })
    }

    /// Compute display names for a batch, in input order
    ///
    /// # Errors
    ///
    /// Returns the first error encountered; later artifacts are not
    /// processed.
    pub fn assemble_all(&self, artifacts: &[Artifact]) -> Result<Vec<String>> {
        artifacts.iter().map(|a| self.assemble(a)).collect()
    }
}

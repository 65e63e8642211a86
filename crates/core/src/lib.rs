//! Core types and traits for display name resolution
//!
//! This crate defines the foundational types used throughout the system:
//! - Identifier, TypeName: validated name tokens
//! - ClassId, ClassRecord: class identity and inheritable metadata
//! - MethodSignature: method name plus parameter types
//! - Artifact: a discovered class, nested class or method needing a label
//! - NamingStrategy: the pluggable name generator, with built-in styles
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod identifier;
pub mod model;
pub mod strategy;

pub use error::{Error, Result};
pub use identifier::{Identifier, IdentifierError, TypeName, MAX_IDENTIFIER_LENGTH};
pub use model::{Artifact, ArtifactKind, ClassId, ClassRecord, DescriptorType, MethodSignature};
pub use strategy::{
    DefaultStyle, NamingStrategy, StrategyConfig, StrategyError, StrategyResult, Style,
    UnderscoreStyle,
};

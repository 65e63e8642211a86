//! Display name engine
//!
//! This crate turns discovered artifacts into display names:
//! - ClassRegistry: class metadata table, populated by discovery
//! - StrategyCatalog: named strategies available to configuration
//! - EngineConfig: `displayname.toml`, selects the fallback strategy
//! - StrategyResolver: nearest configuration along superclass and enclosing chains
//! - DisplayNameAssembler: explicit label first, generated name otherwise
//!
//! The engine only reads class metadata; it never discovers or runs tests.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assembler;
pub mod catalog;
pub mod config;
pub mod registry;
pub mod resolver;

pub use assembler::{Descriptor, DisplayNameAssembler};
pub use catalog::StrategyCatalog;
pub use config::{EngineConfig, CONFIG_FILE_NAME};
pub use registry::ClassRegistry;
pub use resolver::{Resolution, ResolutionSource, StrategyResolver};

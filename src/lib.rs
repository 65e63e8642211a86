//! displayname - Display names for discovered tests
//!
//! Computes the label shown in reports for every discovered test class,
//! nested class and test method.
//!
//! # Quick Start
//!
//! ```
//! use displayname::{
//!     Artifact, ClassRecord, ClassRegistry, DisplayNameAssembler, Identifier, MethodSignature,
//!     StrategyConfig, Style,
//! };
//! use std::sync::Arc;
//!
//! let mut registry = ClassRegistry::new();
//! registry.register(
//!     ClassRecord::new("demo.StackTests", Identifier::new("StackTests")?)
//!         .with_configuration(StrategyConfig::from(Style::Underscore)),
//! )?;
//!
//! let assembler = DisplayNameAssembler::new(Arc::new(registry));
//! let method = MethodSignature::no_args(Identifier::new("is_empty")?);
//! assert_eq!(assembler.assemble(&Artifact::method("demo.StackTests", method))?, "is empty()");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Architecture
//!
//! The model, strategy trait and errors live in `displayname-core`; the
//! registry, configuration, resolver and assembler live in
//! `displayname-engine`. Both are re-exported here.

pub use displayname_core::*;
pub use displayname_engine::*;

//! Class registry
//!
//! The metadata table the resolver walks. The discovery collaborator
//! registers one `ClassRecord` per class before any name is assembled;
//! after that the registry is frozen behind an `Arc` and only read.
//!
//! ## Registration Order
//!
//! A class can only be registered once its superclass and enclosing class
//! are present. Parent pointers therefore always point at earlier entries,
//! which keeps every chain finite and acyclic.

use displayname_core::{ClassId, ClassRecord, Error, Result};
use rustc_hash::FxHashMap;
use std::iter;
use tracing::debug;

/// Class metadata keyed by class identity
#[derive(Debug, Default, Clone)]
pub struct ClassRegistry {
    classes: FxHashMap<ClassId, ClassRecord>,
}

impl ClassRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class
    ///
    /// # Errors
    ///
    /// - `DuplicateClass` if the id is already registered
    /// - `UnknownClass` if the superclass or enclosing class is not registered yet
    pub fn register(&mut self, record: ClassRecord) -> Result<()> {
        if self.classes.contains_key(record.id()) {
            return Err(Error::DuplicateClass(record.id().clone()));
        }
        for parent in [record.superclass(), record.enclosing()].into_iter().flatten() {
            if !self.classes.contains_key(parent) {
                return Err(Error::UnknownClass(parent.clone()));
            }
        }

        debug!(
            class = %record.id(),
            superclass = ?record.superclass().map(ClassId::as_str),
            enclosing = ?record.enclosing().map(ClassId::as_str),
            configured = record.configuration().is_some(),
            "Registered class"
        );
        self.classes.insert(record.id().clone(), record);
        Ok(())
    }

    /// Look up a class
    ///
    /// # Errors
    ///
    /// Returns `UnknownClass` if the id is not registered.
    pub fn get(&self, id: &ClassId) -> Result<&ClassRecord> {
        self.classes
            .get(id)
            .ok_or_else(|| Error::UnknownClass(id.clone()))
    }

    /// Check if a class is registered
    pub fn contains(&self, id: &ClassId) -> bool {
        self.classes.contains_key(id)
    }

    /// Number of registered classes
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// True if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// `start` followed by its superclasses, nearest first
    pub fn superclass_chain<'a>(
        &'a self,
        start: &'a ClassRecord,
    ) -> impl Iterator<Item = &'a ClassRecord> + 'a {
        iter::successors(Some(start), move |class| {
            class.superclass().and_then(|id| self.classes.get(id))
        })
    }

    /// `start` followed by its lexically enclosing classes, innermost first
    pub fn lexical_chain<'a>(
        &'a self,
        start: &'a ClassRecord,
    ) -> impl Iterator<Item = &'a ClassRecord> + 'a {
        iter::successors(Some(start), move |class| {
            class.enclosing().and_then(|id| self.classes.get(id))
        })
    }

    /// Enclosing classes of `id`, from the immediate container out to the root
    ///
    /// Empty for top-level classes.
    ///
    /// # Errors
    ///
    /// Returns `UnknownClass` if `id` is not registered.
    pub fn enclosing_chain(&self, id: &ClassId) -> Result<Vec<&ClassRecord>> {
        let start = self.get(id)?;
        Ok(self.lexical_chain(start).skip(1).collect())
    }
}

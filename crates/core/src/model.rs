//! Discovered artifacts and the class metadata they point at
//!
//! The discovery collaborator hands the engine two kinds of input:
//! - `ClassRecord`: one per class, carrying the parent pointers
//!   (`superclass`, `enclosing`) and the optional strategy configuration
//! - `Artifact`: one per class, nested class or method that needs a label
//!
//! Artifacts only name their class by `ClassId`; the enclosing chain is
//! walked through the registry that owns the class records.

use crate::error::{Error, Result};
use crate::identifier::{Identifier, TypeName};
use crate::strategy::StrategyConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identity of a class
///
/// Usually the fully-qualified binary name
/// (`org.example.StackTestCase$A_new_stack`). The engine only compares ids;
/// it never prints them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassId(String);

impl ClassId {
    /// Create a class id
    pub fn new(id: impl Into<String>) -> Self {
        ClassId(id.into())
    }

    /// Get the id as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the id is empty or only whitespace
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClassId {
    fn from(value: &str) -> Self {
        ClassId::new(value)
    }
}

impl From<String> for ClassId {
    fn from(value: String) -> Self {
        ClassId(value)
    }
}

/// Metadata of one class as seen by the engine
///
/// `enclosing` is only set for nested test classes. Member classes that are
/// discovered as top-level containers carry their outer class in `name`
/// instead (`Outer$Member`) and have no enclosing link.
#[derive(Debug, Clone)]
pub struct ClassRecord {
    id: ClassId,
    name: Identifier,
    superclass: Option<ClassId>,
    enclosing: Option<ClassId>,
    configuration: Option<StrategyConfig>,
}

impl ClassRecord {
    /// Create a record with no parents and no configuration
    pub fn new(id: impl Into<ClassId>, name: Identifier) -> Self {
        Self {
            id: id.into(),
            name,
            superclass: None,
            enclosing: None,
            configuration: None,
        }
    }

    /// Set the superclass
    pub fn extends(mut self, superclass: impl Into<ClassId>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    /// Mark this class as nested inside `enclosing`
    pub fn nested_in(mut self, enclosing: impl Into<ClassId>) -> Self {
        self.enclosing = Some(enclosing.into());
        self
    }

    /// Attach a strategy configuration directly to this class
    pub fn with_configuration(mut self, configuration: StrategyConfig) -> Self {
        self.configuration = Some(configuration);
        self
    }

    /// Class identity
    pub fn id(&self) -> &ClassId {
        &self.id
    }

    /// Identifier printed for this class
    pub fn name(&self) -> &Identifier {
        &self.name
    }

    /// Superclass, if any
    pub fn superclass(&self) -> Option<&ClassId> {
        self.superclass.as_ref()
    }

    /// Lexically enclosing class, set for nested classes only
    pub fn enclosing(&self) -> Option<&ClassId> {
        self.enclosing.as_ref()
    }

    /// True if this class is nested inside another test class
    pub fn is_nested(&self) -> bool {
        self.enclosing.is_some()
    }

    /// Configuration declared directly on this class
    pub fn configuration(&self) -> Option<&StrategyConfig> {
        self.configuration.as_ref()
    }
}

/// Method name plus parameter types
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodSignature {
    name: Identifier,
    #[serde(default)]
    parameter_types: Vec<TypeName>,
}

impl MethodSignature {
    /// Create a signature
    pub fn new(name: Identifier, parameter_types: Vec<TypeName>) -> Self {
        Self {
            name,
            parameter_types,
        }
    }

    /// Signature of a method without parameters
    pub fn no_args(name: Identifier) -> Self {
        Self::new(name, Vec::new())
    }

    /// Method identifier
    pub fn name(&self) -> &Identifier {
        &self.name
    }

    /// Parameter type names in declaration order
    pub fn parameter_types(&self) -> &[TypeName] {
        &self.parameter_types
    }

    /// Parameter types joined with `", "`, without the parentheses
    pub fn parameter_list(&self) -> String {
        self.parameter_types
            .iter()
            .map(TypeName::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.parameter_list())
    }
}

/// What kind of test unit an artifact is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// Top-level test class
    Class,
    /// Test class nested inside another test class
    NestedClass,
    /// Test method
    Method,
}

impl ArtifactKind {
    /// Reporting category for this kind
    pub fn descriptor_type(self) -> DescriptorType {
        match self {
            ArtifactKind::Class | ArtifactKind::NestedClass => DescriptorType::Container,
            ArtifactKind::Method => DescriptorType::Test,
        }
    }
}

/// Reporting category the caller prefixes labels with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DescriptorType {
    /// Classes and nested classes
    Container,
    /// Methods
    Test,
}

impl fmt::Display for DescriptorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescriptorType::Container => f.write_str("CONTAINER"),
            DescriptorType::Test => f.write_str("TEST"),
        }
    }
}

/// A discovered test unit that needs a display name
///
/// `class` is the artifact's own class for classes and nested classes. For
/// methods it is the test class the method was discovered in, which may be a
/// subclass of the class that declares the method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    kind: ArtifactKind,
    class: ClassId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    method: Option<MethodSignature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    explicit_label: Option<String>,
}

impl Artifact {
    /// A top-level class
    pub fn class(class: impl Into<ClassId>) -> Self {
        Self {
            kind: ArtifactKind::Class,
            class: class.into(),
            method: None,
            explicit_label: None,
        }
    }

    /// A nested class
    pub fn nested_class(class: impl Into<ClassId>) -> Self {
        Self {
            kind: ArtifactKind::NestedClass,
            ..Self::class(class)
        }
    }

    /// A method discovered in `class`
    pub fn method(class: impl Into<ClassId>, method: MethodSignature) -> Self {
        Self {
            kind: ArtifactKind::Method,
            class: class.into(),
            method: Some(method),
            explicit_label: None,
        }
    }

    /// Attach an explicit label that overrides generated names
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.explicit_label = Some(label.into());
        self
    }

    /// Artifact kind
    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    /// Own class, or the test class for methods
    pub fn class_id(&self) -> &ClassId {
        &self.class
    }

    /// Method signature, present for methods only
    pub fn method_signature(&self) -> Option<&MethodSignature> {
        self.method.as_ref()
    }

    /// Explicit label as declared
    pub fn explicit_label(&self) -> Option<&str> {
        self.explicit_label.as_deref()
    }

    /// Check that the identity fields match the kind
    ///
    /// Artifacts built through the constructors are always well formed;
    /// deserialized ones may not be.
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedArtifact` describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.class.is_blank() {
            return Err(Error::malformed(format!(
                "{:?} artifact has an empty class id",
                self.kind
            )));
        }
        match (self.kind, &self.method) {
            (ArtifactKind::Method, None) => Err(Error::malformed(format!(
                "method artifact in class '{}' has no method signature",
                self.class
            ))),
            (ArtifactKind::Class | ArtifactKind::NestedClass, Some(method)) => {
                Err(Error::malformed(format!(
                    "{:?} artifact '{}' carries a method signature '{}'",
                    self.kind, self.class, method
                )))
            }
            _ => Ok(()),
        }
    }
}

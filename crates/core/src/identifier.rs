//! Validated identifiers
//!
//! Every name the engine prints starts life as an identifier handed over by
//! the discovery collaborator: class names, method names and parameter type
//! names. They are validated once, on construction, so that the naming
//! strategies can treat them as well-formed tokens.
//!
//! ## Validation
//!
//! Identifiers must:
//! - Be 1-512 characters
//! - Start with a letter, `_` or `$`
//! - Contain only letters, digits, `_` and `$`
//!
//! Parameter type names are looser (see [`TypeName`]) because they may carry
//! qualified or array/generic forms such as `java.lang.String[]`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length of an identifier or type name
pub const MAX_IDENTIFIER_LENGTH: usize = 512;

/// Error when validating an identifier or type name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// Identifier is empty
    Empty,
    /// Identifier exceeds maximum length
    TooLong {
        /// Actual length in characters
        length: usize,
        /// Maximum allowed length
        max: usize,
    },
    /// Identifier starts with a character that cannot start a name
    InvalidStart {
        /// The invalid starting character
        char: char,
    },
    /// Identifier contains an invalid character
    InvalidChar {
        /// The invalid character
        char: char,
        /// Position of the invalid character
        position: usize,
    },
}

impl fmt::Display for IdentifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierError::Empty => write!(f, "identifier cannot be empty"),
            IdentifierError::TooLong { length, max } => {
                write!(f, "identifier too long: {} chars (max {})", length, max)
            }
            IdentifierError::InvalidStart { char } => {
                write!(
                    f,
                    "identifier cannot start with '{}' (must start with a letter, '_' or '$')",
                    char
                )
            }
            IdentifierError::InvalidChar { char, position } => {
                write!(f, "invalid character '{}' at position {}", char, position)
            }
        }
    }
}

impl std::error::Error for IdentifierError {}

fn check_length(name: &str) -> Result<(), IdentifierError> {
    if name.is_empty() {
        return Err(IdentifierError::Empty);
    }
    let length = name.chars().count();
    if length > MAX_IDENTIFIER_LENGTH {
        return Err(IdentifierError::TooLong {
            length,
            max: MAX_IDENTIFIER_LENGTH,
        });
    }
    Ok(())
}

/// A class or method name token
///
/// This is the identifier a naming strategy transforms. For top-level
/// classes it may contain `$` to denote a member class (`Outer$Member`);
/// package qualifiers are never part of it.
///
/// ## Examples
///
/// Valid identifiers:
/// - "StackTestCase"
/// - "is_empty"
/// - "DisplayNameGenerationTests$DefaultStyleTestCase"
///
/// Invalid identifiers:
/// - "" (empty)
/// - "1st"
/// - "has space"
/// - "org.example.Foo"
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    /// Create a new Identifier, validating the input
    ///
    /// # Errors
    ///
    /// Returns `IdentifierError` if the name is invalid.
    pub fn new(name: impl Into<String>) -> Result<Self, IdentifierError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Identifier(name))
    }

    /// Validate an identifier
    pub fn validate(name: &str) -> Result<(), IdentifierError> {
        check_length(name)?;

        for (pos, ch) in name.chars().enumerate() {
            if pos == 0 && !Self::is_valid_start(ch) {
                return Err(IdentifierError::InvalidStart { char: ch });
            }
            if !Self::is_valid_char(ch) {
                return Err(IdentifierError::InvalidChar {
                    char: ch,
                    position: pos,
                });
            }
        }

        Ok(())
    }

    #[inline]
    fn is_valid_start(c: char) -> bool {
        c.is_alphabetic() || c == '_' || c == '$'
    }

    #[inline]
    fn is_valid_char(c: char) -> bool {
        c.is_alphanumeric() || c == '_' || c == '$'
    }

    /// Get the identifier as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Identifier {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Identifier::new(value)
    }
}

impl TryFrom<&str> for Identifier {
    type Error = IdentifierError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Identifier::new(value)
    }
}

impl From<Identifier> for String {
    fn from(value: Identifier) -> Self {
        value.0
    }
}

/// Simple name of a method parameter type
///
/// Printed verbatim inside the parentheses of a method display name, so it
/// must not contain the characters that delimit that list: `(`, `)` and `,`.
/// Besides identifier characters it accepts `.`, `[`, `]`, `<`, `>` and `?`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeName(String);

impl TypeName {
    /// Create a new TypeName, validating the input
    ///
    /// # Errors
    ///
    /// Returns `IdentifierError` if the name is invalid.
    pub fn new(name: impl Into<String>) -> Result<Self, IdentifierError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(TypeName(name))
    }

    /// Validate a type name
    pub fn validate(name: &str) -> Result<(), IdentifierError> {
        check_length(name)?;

        for (pos, ch) in name.chars().enumerate() {
            if pos == 0 && !Identifier::is_valid_start(ch) {
                return Err(IdentifierError::InvalidStart { char: ch });
            }
            if !(Identifier::is_valid_char(ch) || matches!(ch, '.' | '[' | ']' | '<' | '>' | '?')) {
                return Err(IdentifierError::InvalidChar {
                    char: ch,
                    position: pos,
                });
            }
        }

        Ok(())
    }

    /// Get the type name as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TypeName {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TypeName::new(value)
    }
}

impl TryFrom<&str> for TypeName {
    type Error = IdentifierError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        TypeName::new(value)
    }
}

impl From<TypeName> for String {
    fn from(value: TypeName) -> Self {
        value.0
    }
}

// ============================================================================
// Tests
// ============================================================================

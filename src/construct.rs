//! The construct model: a discovered type declaration and its kind.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// The category of a discovered declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstructKind {
    Class,
    Interface,
    Trait,
    Enum,
}

impl ConstructKind {
    /// All kinds, in declaration-keyword order.
    pub fn all() -> [ConstructKind; 4] {
        [
            ConstructKind::Class,
            ConstructKind::Interface,
            ConstructKind::Trait,
            ConstructKind::Enum,
        ]
    }

    /// The lowercase keyword for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConstructKind::Class => "class",
            ConstructKind::Interface => "interface",
            ConstructKind::Trait => "trait",
            ConstructKind::Enum => "enum",
        }
    }
}

impl fmt::Display for ConstructKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a kind string outside the four valid kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("construct kind must be one of: class, interface, trait, or enum (got {0:?})")]
pub struct UnknownKind(pub String);

impl FromStr for ConstructKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "class" => Ok(ConstructKind::Class),
            "interface" => Ok(ConstructKind::Interface),
            "trait" => Ok(ConstructKind::Trait),
            "enum" => Ok(ConstructKind::Enum),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

/// One discovered type declaration: a fully-qualified name plus its kind.
///
/// Constructs are immutable values with structural equality; two constructs
/// with the same name and kind are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Construct {
    name: String,
    kind: ConstructKind,
}

impl Construct {
    /// Create a construct from a fully-qualified name and kind.
    pub fn new(name: impl Into<String>, kind: ConstructKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// The fully-qualified name, with no leading or trailing separators.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declaration kind.
    pub fn kind(&self) -> ConstructKind {
        self.kind
    }
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

//! MutantType enum classifying the kind of generated model.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of model kinds a generated model can be.
///
/// Serialized and displayed as the upper-case tag (`CLASS`, `ABSTRACT`, `UML`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MutantType {
    Class,
    Abstract,
    Uml,
}

/// Error returned when text does not name a [`MutantType`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid model type '{0}'. Valid values: CLASS, ABSTRACT, UML")]
pub struct ParseMutantTypeError(pub String);

impl MutantType {
    /// Returns a static slice of all model types in declaration order.
    pub fn all() -> &'static [MutantType] {
        &[MutantType::Class, MutantType::Abstract, MutantType::Uml]
    }

    /// Returns the canonical upper-case tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            MutantType::Class => "CLASS",
            MutantType::Abstract => "ABSTRACT",
            MutantType::Uml => "UML",
        }
    }

    /// Returns a human-readable description of this model type.
    pub fn description(&self) -> &'static str {
        match self {
            MutantType::Class => "Concrete class model with instantiable root",
            MutantType::Abstract => "Abstract model whose root type cannot be instantiated",
            MutantType::Uml => "UML diagram model",
        }
    }
}

impl std::fmt::Display for MutantType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for MutantType {
    type Err = ParseMutantTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MutantType::all()
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseMutantTypeError(s.to_string()))
    }
}

//! Type references
//!
//! Variables carry the name of their source-level type. Types are not
//! resolved here; class-hierarchy resolution belongs to an external
//! collaborator, so a type is just its canonical name.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A reference to a source-level type by canonical name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef(String);

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TypeRef {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

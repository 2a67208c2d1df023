//! IR variables
//!
//! Named, typed, method-scoped storage locations. Identity is the dense
//! `VarId` index into the owning method's variable table; it never
//! spans methods.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::models::TypeRef;

/// Dense index of a variable within one method's variable table
pub type VarId = u32;

/// How a variable came into existence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VarKind {
    /// The implicit receiver of an instance method
    Receiver,

    /// A declared parameter
    Parameter,

    /// A body local, created on first resolution
    Local,

    /// A fresh temporary holding exactly one literal
    ConstantTemp,
}

/// A method-scoped variable, immutable once created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub id: VarId,
    pub name: String,
    pub ty: TypeRef,
    pub kind: VarKind,
}

impl Variable {
    pub fn new(id: VarId, name: impl Into<String>, ty: impl Into<TypeRef>, kind: VarKind) -> Self {
        Self {
            id,
            name: name.into(),
            ty: ty.into(),
            kind,
        }
    }

    /// Whether this variable is a constant temporary
    pub fn is_constant_temp(&self) -> bool {
        self.kind == VarKind::ConstantTemp
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.ty)
    }
}

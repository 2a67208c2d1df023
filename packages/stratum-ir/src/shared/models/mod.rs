//! Shared models

mod source;
mod ty;

pub use source::{
    BinaryOpKind, ConstantNode, LocalDecl, LocalId, Operand, Rvalue, SourceMethod, SourceStmt,
};
pub use ty::TypeRef;

//! Lowering domain - the canonical three-address IR
//!
//! Closed value sets (literals, operators, statements) plus the
//! immutable per-method record. Everything here is data; the
//! translation policy lives in the application layer.

mod literal;
mod method_ir;
mod operator;
mod statement;
mod variable;

pub use literal::Literal;
pub use method_ir::MethodIr;
pub use operator::{ArithmeticOp, BinaryFamily, BinaryOp, BitwiseOp, ComparisonOp, ShiftOp};
pub use statement::Stmt;
pub use variable::{VarId, VarKind, Variable};

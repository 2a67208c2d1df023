//! Lowering - source statements to canonical three-address IR
//!
//! Maps the open source statement/expression grammar onto the closed IR
//! form while preserving evaluation order. Lowering is intentionally the
//! most literal flattening of the source: no constant folding, no
//! dead-temporary elimination, no control-flow simplification. Any such
//! cleanup belongs to a later pass.

pub mod application;
pub mod domain;

pub use application::{IrBuildOutput, MethodIrBuilder, SkippedStmt};
pub use domain::{
    ArithmeticOp, BinaryFamily, BinaryOp, BitwiseOp, ComparisonOp, Literal, MethodIr, ShiftOp,
    Stmt, VarId, VarKind, Variable,
};

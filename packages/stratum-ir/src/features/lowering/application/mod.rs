//! Lowering application layer - per-method translation

mod ir_builder;
mod var_manager;

pub use ir_builder::{IrBuildOutput, MethodIrBuilder, SkippedStmt};
pub use var_manager::VarManager;

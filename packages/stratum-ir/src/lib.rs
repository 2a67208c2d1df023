/*
 * Stratum IR - Whole-Program Static Analysis Core
 *
 * Feature-First Hexagonal Architecture:
 * - shared/    : Source-side method model consumed by the translator
 * - features/  : Vertical slices (lowering → points_to → escape)
 *
 * The core is a batch, single-threaded analysis layer over immutable
 * inputs: a parsed method body, or a frozen points-to snapshot. Each
 * run owns its builder, graph, and visited sets exclusively; nothing
 * here performs I/O or keeps ambient global state.
 */

/// Shared models
pub mod shared;

/// Feature modules
pub mod features;

/// Analysis run options
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{AnalysisOptions, UnresolvedOperatorPolicy, DEFAULT_THREAD_CLASS};
pub use errors::{Result, StratumError};

pub use features::escape::{EscapeSet, ObjGraph, ThreadEscapeAnalysis};
pub use features::lowering::{
    BinaryFamily, BinaryOp, IrBuildOutput, Literal, MethodIr, MethodIrBuilder, SkippedStmt, Stmt,
    VarId, VarKind, Variable,
};
pub use features::points_to::{
    ClassUniverse, CsObj, CsVar, ObjId, PointsToResult, PointsToSnapshot, ProgramMetadata,
};
pub use shared::models::{
    BinaryOpKind, ConstantNode, LocalDecl, LocalId, Operand, Rvalue, SourceMethod, SourceStmt,
    TypeRef,
};

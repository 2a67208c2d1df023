//! Method IR builder
//!
//! Translates one source method body into the canonical three-address
//! IR. The builder owns all mutable translation state (variable table,
//! statement list, temp counter) for exactly one method and exposes
//! only the finished immutable record.
//!
//! Failure scoping:
//! - an unsupported constant aborts the enclosing method;
//! - an unresolved operator abandons the enclosing statement (policy
//!   can escalate to the method);
//! - any other unmodeled statement shape is recorded, logged, and
//!   skipped, and translation continues.

use tracing::warn;

use super::var_manager::VarManager;
use crate::config::{AnalysisOptions, UnresolvedOperatorPolicy};
use crate::errors::{Result, StratumError};
use crate::features::lowering::domain::{BinaryOp, Literal, MethodIr, Stmt, VarId};
use crate::shared::models::{Operand, Rvalue, SourceMethod, SourceStmt};

/// A source statement the translator abandoned, with the reason
#[derive(Debug)]
pub struct SkippedStmt {
    /// Index of the statement in the source body
    pub index: usize,

    /// Grammar-level kind of the abandoned statement
    pub kind: &'static str,

    pub reason: StratumError,
}

/// Result of translating one method
///
/// A non-empty skip list means the IR is complete-with-diagnostics:
/// every translatable statement was lowered, and every abandoned one is
/// accounted for here.
#[derive(Debug)]
pub struct IrBuildOutput {
    pub ir: MethodIr,
    pub skipped: Vec<SkippedStmt>,
}

/// Translates source methods into method IR
pub struct MethodIrBuilder<'a> {
    options: &'a AnalysisOptions,
}

impl<'a> MethodIrBuilder<'a> {
    pub fn new(options: &'a AnalysisOptions) -> Self {
        Self { options }
    }

    /// Translate one method
    pub fn build(&self, method: &SourceMethod) -> Result<IrBuildOutput> {
        let mut vars = VarManager::new(&method.locals);
        let mut stmts = Vec::new();
        let mut skipped = Vec::new();

        if !method.is_static {
            let this_local = method.this_local.ok_or_else(|| {
                StratumError::invalid_ir(format!(
                    "instance method `{}` has no receiver slot",
                    method.name
                ))
            })?;
            vars.declare_receiver(this_local);
        }
        for &param in &method.param_locals {
            vars.declare_parameter(param);
        }

        for (index, stmt) in method.stmts.iter().enumerate() {
            self.build_stmt(method, index, stmt, &mut vars, &mut stmts, &mut skipped)?;
        }

        let (receiver, params, var_table) = vars.finish();
        let ir = MethodIr::new(method.name.clone(), receiver, params, var_table, stmts)?;
        Ok(IrBuildOutput { ir, skipped })
    }

    fn build_stmt(
        &self,
        method: &SourceMethod,
        index: usize,
        stmt: &SourceStmt,
        vars: &mut VarManager<'_>,
        stmts: &mut Vec<Stmt>,
        skipped: &mut Vec<SkippedStmt>,
    ) -> Result<()> {
        match stmt {
            SourceStmt::Assign { lhs, rhs } => match rhs {
                Rvalue::Constant(node) => {
                    // Conversion failure is fatal to the whole method
                    let value = Literal::from_constant(node)?;
                    let dst = vars.resolve(*lhs);
                    stmts.push(Stmt::AssignLiteral { dst, value });
                    Ok(())
                }
                Rvalue::Local(src) => {
                    let dst = vars.resolve(*lhs);
                    let src = vars.resolve(*src);
                    stmts.push(Stmt::Copy { dst, src });
                    Ok(())
                }
                Rvalue::Binary { op, lhs: a, rhs: b } => {
                    // Classify before touching operands so an abandoned
                    // statement leaves no stray temporaries behind.
                    let op = match BinaryOp::classify(*op) {
                        Ok(op) => op,
                        Err(reason) => {
                            return self.skip(method, index, stmt, reason, skipped);
                        }
                    };
                    let v1 = Self::local_or_constant(a, vars, stmts)?;
                    let v2 = Self::local_or_constant(b, vars, stmts)?;
                    let dst = vars.resolve(*lhs);
                    stmts.push(Stmt::Binary {
                        dst,
                        op,
                        lhs: v1,
                        rhs: v2,
                    });
                    Ok(())
                }
                Rvalue::Invoke { .. } | Rvalue::New { .. } => {
                    let reason = StratumError::UnhandledStatement {
                        kind: stmt.kind_name(),
                        index,
                    };
                    self.skip(method, index, stmt, reason, skipped)
                }
            },
            _ => {
                let reason = StratumError::UnhandledStatement {
                    kind: stmt.kind_name(),
                    index,
                };
                self.skip(method, index, stmt, reason, skipped)
            }
        }
    }

    /// Resolve a binary operand to a variable, materializing constants
    /// into fresh temporaries first so literals never appear as binary
    /// operands.
    fn local_or_constant(
        operand: &Operand,
        vars: &mut VarManager<'_>,
        stmts: &mut Vec<Stmt>,
    ) -> Result<VarId> {
        match operand {
            Operand::Local(local) => Ok(vars.resolve(*local)),
            Operand::Constant(node) => {
                let value = Literal::from_constant(node)?;
                let dst = vars.new_constant_temp(&value);
                stmts.push(Stmt::AssignLiteral { dst, value });
                Ok(dst)
            }
        }
    }

    fn skip(
        &self,
        method: &SourceMethod,
        index: usize,
        stmt: &SourceStmt,
        reason: StratumError,
        skipped: &mut Vec<SkippedStmt>,
    ) -> Result<()> {
        if matches!(reason, StratumError::UnresolvedOperator(_))
            && self.options.unresolved_operator_policy == UnresolvedOperatorPolicy::AbortMethod
        {
            return Err(reason);
        }
        warn!(
            method = %method.name,
            index,
            kind = stmt.kind_name(),
            %reason,
            "skipping untranslatable statement"
        );
        skipped.push(SkippedStmt {
            index,
            kind: stmt.kind_name(),
            reason,
        });
        Ok(())
    }
}

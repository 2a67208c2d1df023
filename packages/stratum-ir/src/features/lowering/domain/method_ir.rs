//! Method IR
//!
//! The finished, immutable per-method record. Construction validates
//! the membership invariant: the receiver, every parameter, and every
//! statement operand must index into the variable table.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::statement::Stmt;
use super::variable::{VarId, Variable};
use crate::errors::{Result, StratumError};

/// Immutable three-address IR of one method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodIr {
    name: String,

    /// Receiver variable, absent iff the method is static
    receiver: Option<VarId>,

    /// Parameter variables in declaration order
    params: Vec<VarId>,

    /// All variables in creation order
    vars: Vec<Variable>,

    /// Statements in emission order
    stmts: Vec<Stmt>,
}

impl MethodIr {
    /// Assemble a method IR, checking the membership invariant
    pub fn new(
        name: impl Into<String>,
        receiver: Option<VarId>,
        params: Vec<VarId>,
        vars: Vec<Variable>,
        stmts: Vec<Stmt>,
    ) -> Result<Self> {
        let ir = Self {
            name: name.into(),
            receiver,
            params,
            vars,
            stmts,
        };
        ir.check_membership()?;
        Ok(ir)
    }

    fn check_membership(&self) -> Result<()> {
        let bound = self.vars.len() as VarId;
        let check = |var: VarId, role: &str| -> Result<()> {
            if var >= bound {
                return Err(StratumError::invalid_ir(format!(
                    "{} variable {} outside table of {} in method `{}`",
                    role, var, bound, self.name
                )));
            }
            Ok(())
        };
        if let Some(this) = self.receiver {
            check(this, "receiver")?;
        }
        for &p in &self.params {
            check(p, "parameter")?;
        }
        for stmt in &self.stmts {
            check(stmt.def(), "defined")?;
            for used in stmt.uses() {
                check(used, "used")?;
            }
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn receiver(&self) -> Option<VarId> {
        self.receiver
    }

    pub fn params(&self) -> &[VarId] {
        &self.params
    }

    pub fn vars(&self) -> &[Variable] {
        &self.vars
    }

    pub fn stmts(&self) -> &[Stmt] {
        &self.stmts
    }

    /// Look up a variable by id
    pub fn var(&self, id: VarId) -> &Variable {
        &self.vars[id as usize]
    }

    fn var_name(&self, id: VarId) -> &str {
        &self.var(id).name
    }

    fn render_stmt(&self, stmt: &Stmt) -> String {
        match stmt {
            Stmt::Copy { dst, src } => {
                format!("{} = {}", self.var_name(*dst), self.var_name(*src))
            }
            Stmt::AssignLiteral { dst, value } => {
                format!("{} = {}", self.var_name(*dst), value)
            }
            Stmt::Binary { dst, op, lhs, rhs } => format!(
                "{} = {} {} {}",
                self.var_name(*dst),
                self.var_name(*lhs),
                op,
                self.var_name(*rhs)
            ),
        }
    }
}

/// Deterministic, diffable textual dump: receiver, parameters,
/// variables, and statements in creation/emission order.
impl fmt::Display for MethodIr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "method {} {{", self.name)?;
        match self.receiver {
            Some(this) => writeln!(f, "  this: {}", self.var(this))?,
            None => writeln!(f, "  this: <static>")?,
        }
        let params: Vec<&str> = self.params.iter().map(|&p| self.var_name(p)).collect();
        writeln!(f, "  params: [{}]", params.join(", "))?;
        writeln!(f, "  vars:")?;
        for var in &self.vars {
            writeln!(f, "    {}", var)?;
        }
        writeln!(f, "  stmts:")?;
        for (i, stmt) in self.stmts.iter().enumerate() {
            writeln!(f, "    [{}] {}", i, self.render_stmt(stmt))?;
        }
        write!(f, "}}")
    }
}

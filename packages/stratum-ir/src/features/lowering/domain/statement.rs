//! IR statements
//!
//! The closed three-address statement set. Operands are always
//! variables; a literal reaches a `Binary` only through a constant
//! temporary assigned by a preceding `AssignLiteral`.

use serde::{Deserialize, Serialize};

use super::literal::Literal;
use super::operator::BinaryOp;
use super::variable::VarId;

/// One three-address statement, immutable once appended
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    /// `dst = src`
    Copy { dst: VarId, src: VarId },

    /// `dst = <literal>`
    AssignLiteral { dst: VarId, value: Literal },

    /// `dst = lhs <op> rhs`
    Binary {
        dst: VarId,
        op: BinaryOp,
        lhs: VarId,
        rhs: VarId,
    },
}

impl Stmt {
    /// The variable defined by this statement
    pub fn def(&self) -> VarId {
        match self {
            Stmt::Copy { dst, .. } => *dst,
            Stmt::AssignLiteral { dst, .. } => *dst,
            Stmt::Binary { dst, .. } => *dst,
        }
    }

    /// The variables used by this statement, in operand order
    pub fn uses(&self) -> Vec<VarId> {
        match self {
            Stmt::Copy { src, .. } => vec![*src],
            Stmt::AssignLiteral { .. } => Vec::new(),
            Stmt::Binary { lhs, rhs, .. } => vec![*lhs, *rhs],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_def_and_uses() {
        let stmt = Stmt::Binary {
            dst: 3,
            op: BinaryOp::classify(crate::shared::models::BinaryOpKind::Add).unwrap(),
            lhs: 0,
            rhs: 2,
        };
        assert_eq!(stmt.def(), 3);
        assert_eq!(stmt.uses(), vec![0, 2]);

        let stmt = Stmt::AssignLiteral {
            dst: 1,
            value: Literal::Int(5),
        };
        assert_eq!(stmt.def(), 1);
        assert!(stmt.uses().is_empty());
    }
}

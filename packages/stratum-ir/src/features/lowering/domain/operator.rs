//! IR binary operators
//!
//! The closed 11-operator set of the IR, grouped into four families.
//! The family is part of the operator's identity because evaluation
//! semantics differ per family downstream (`Cmpl` and `Cmpg` disagree
//! only on NaN ordering, so collapsing them would lose meaning).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{Result, StratumError};
use crate::shared::models::BinaryOpKind;

/// Operator family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryFamily {
    Arithmetic,
    Bitwise,
    Comparison,
    Shift,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArithmeticOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BitwiseOp {
    And,
    Or,
    Xor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOp {
    Cmp,
    Cmpl,
    Cmpg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftOp {
    Shl,
    Shr,
    Ushr,
}

/// A classified binary operator, family preserved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    Arithmetic(ArithmeticOp),
    Bitwise(BitwiseOp),
    Comparison(ComparisonOp),
    Shift(ShiftOp),
}

impl BinaryOp {
    /// Classify a source binary operator node
    ///
    /// Condition operators (`eq`, `lt`, ...) belong to branches, not to
    /// three-address binaries, and are rejected here.
    pub fn classify(kind: BinaryOpKind) -> Result<BinaryOp> {
        match kind {
            BinaryOpKind::Add => Ok(BinaryOp::Arithmetic(ArithmeticOp::Add)),
            BinaryOpKind::Sub => Ok(BinaryOp::Arithmetic(ArithmeticOp::Sub)),
            BinaryOpKind::Mul => Ok(BinaryOp::Arithmetic(ArithmeticOp::Mul)),
            BinaryOpKind::Div => Ok(BinaryOp::Arithmetic(ArithmeticOp::Div)),
            BinaryOpKind::Rem => Ok(BinaryOp::Arithmetic(ArithmeticOp::Rem)),
            BinaryOpKind::And => Ok(BinaryOp::Bitwise(BitwiseOp::And)),
            BinaryOpKind::Or => Ok(BinaryOp::Bitwise(BitwiseOp::Or)),
            BinaryOpKind::Xor => Ok(BinaryOp::Bitwise(BitwiseOp::Xor)),
            BinaryOpKind::Cmp => Ok(BinaryOp::Comparison(ComparisonOp::Cmp)),
            BinaryOpKind::Cmpl => Ok(BinaryOp::Comparison(ComparisonOp::Cmpl)),
            BinaryOpKind::Cmpg => Ok(BinaryOp::Comparison(ComparisonOp::Cmpg)),
            BinaryOpKind::Shl => Ok(BinaryOp::Shift(ShiftOp::Shl)),
            BinaryOpKind::Shr => Ok(BinaryOp::Shift(ShiftOp::Shr)),
            BinaryOpKind::Ushr => Ok(BinaryOp::Shift(ShiftOp::Ushr)),
            other => Err(StratumError::UnresolvedOperator(
                other.kind_name().to_string(),
            )),
        }
    }

    /// The operator's family
    pub fn family(&self) -> BinaryFamily {
        match self {
            BinaryOp::Arithmetic(_) => BinaryFamily::Arithmetic,
            BinaryOp::Bitwise(_) => BinaryFamily::Bitwise,
            BinaryOp::Comparison(_) => BinaryFamily::Comparison,
            BinaryOp::Shift(_) => BinaryFamily::Shift,
        }
    }

    /// Symbol used in textual IR dumps
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Arithmetic(ArithmeticOp::Add) => "+",
            BinaryOp::Arithmetic(ArithmeticOp::Sub) => "-",
            BinaryOp::Arithmetic(ArithmeticOp::Mul) => "*",
            BinaryOp::Arithmetic(ArithmeticOp::Div) => "/",
            BinaryOp::Arithmetic(ArithmeticOp::Rem) => "%",
            BinaryOp::Bitwise(BitwiseOp::And) => "&",
            BinaryOp::Bitwise(BitwiseOp::Or) => "|",
            BinaryOp::Bitwise(BitwiseOp::Xor) => "^",
            BinaryOp::Comparison(ComparisonOp::Cmp) => "cmp",
            BinaryOp::Comparison(ComparisonOp::Cmpl) => "cmpl",
            BinaryOp::Comparison(ComparisonOp::Cmpg) => "cmpg",
            BinaryOp::Shift(ShiftOp::Shl) => "<<",
            BinaryOp::Shift(ShiftOp::Shr) => ">>",
            BinaryOp::Shift(ShiftOp::Ushr) => ">>>",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

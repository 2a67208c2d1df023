//! IR literal values
//!
//! The closed literal set of the IR. Conversion from the open source
//! grammar is total over the seven supported kinds and an explicit
//! failure for everything else.
//!
//! Equality is exact: floating-point literals compare by bit pattern,
//! so `NaN` literals with the same payload are equal and `0.0`/`-0.0`
//! are distinct. The translator relies on this when deciding that equal
//! constants still get separate temporaries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::errors::{Result, StratumError};
use crate::shared::models::ConstantNode;

/// An immutable tagged literal value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Literal {
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Str(String),
    Null,
    /// A class object, by canonical class name
    Class(String),
}

impl Literal {
    /// Convert a source constant node to a literal
    ///
    /// Pure and deterministic; equal inputs of the same kind always
    /// convert to equal literals.
    pub fn from_constant(node: &ConstantNode) -> Result<Literal> {
        match node {
            ConstantNode::Int(v) => Ok(Literal::Int(*v)),
            ConstantNode::Long(v) => Ok(Literal::Long(*v)),
            ConstantNode::Float(v) => Ok(Literal::Float(*v)),
            ConstantNode::Double(v) => Ok(Literal::Double(*v)),
            ConstantNode::Str(v) => Ok(Literal::Str(v.clone())),
            ConstantNode::Null => Ok(Literal::Null),
            ConstantNode::Class(name) => Ok(Literal::Class(name.clone())),
            other => Err(StratumError::UnsupportedConstant(
                other.kind_name().to_string(),
            )),
        }
    }

    /// Literal kind name
    pub fn kind_name(&self) -> &'static str {
        match self {
            Literal::Int(_) => "int",
            Literal::Long(_) => "long",
            Literal::Float(_) => "float",
            Literal::Double(_) => "double",
            Literal::Str(_) => "string",
            Literal::Null => "null",
            Literal::Class(_) => "class",
        }
    }

    /// Category tag used when naming constant temporaries
    pub fn const_tag(&self) -> &'static str {
        self.kind_name()
    }

    /// Canonical name of the type this literal inhabits
    pub fn type_name(&self) -> &'static str {
        match self {
            Literal::Int(_) => "int",
            Literal::Long(_) => "long",
            Literal::Float(_) => "float",
            Literal::Double(_) => "double",
            Literal::Str(_) => "java.lang.String",
            Literal::Null => "null-type",
            Literal::Class(_) => "java.lang.Class",
        }
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Literal::Int(a), Literal::Int(b)) => a == b,
            (Literal::Long(a), Literal::Long(b)) => a == b,
            (Literal::Float(a), Literal::Float(b)) => a.to_bits() == b.to_bits(),
            (Literal::Double(a), Literal::Double(b)) => a.to_bits() == b.to_bits(),
            (Literal::Str(a), Literal::Str(b)) => a == b,
            (Literal::Null, Literal::Null) => true,
            (Literal::Class(a), Literal::Class(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Literal {}

impl Hash for Literal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Literal::Int(v) => v.hash(state),
            Literal::Long(v) => v.hash(state),
            Literal::Float(v) => v.to_bits().hash(state),
            Literal::Double(v) => v.to_bits().hash(state),
            Literal::Str(v) => v.hash(state),
            Literal::Null => {}
            Literal::Class(v) => v.hash(state),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(v) => write!(f, "{}", v),
            Literal::Long(v) => write!(f, "{}L", v),
            Literal::Float(v) => write!(f, "{:?}F", v),
            Literal::Double(v) => write!(f, "{:?}", v),
            Literal::Str(v) => write!(f, "{:?}", v),
            Literal::Null => write!(f, "null"),
            Literal::Class(name) => write!(f, "{}.class", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_all_supported_kinds() {
        let cases = vec![
            (ConstantNode::Int(42), Literal::Int(42)),
            (ConstantNode::Long(-7), Literal::Long(-7)),
            (ConstantNode::Float(1.5), Literal::Float(1.5)),
            (ConstantNode::Double(2.25), Literal::Double(2.25)),
            (
                ConstantNode::Str("hi".to_string()),
                Literal::Str("hi".to_string()),
            ),
            (ConstantNode::Null, Literal::Null),
            (
                ConstantNode::Class("java.lang.Object".to_string()),
                Literal::Class("java.lang.Object".to_string()),
            ),
        ];
        for (node, expected) in cases {
            assert_eq!(Literal::from_constant(&node).unwrap(), expected);
        }
    }

    #[test]
    fn test_float_bit_patterns_preserved() {
        let nan = f64::from_bits(0x7ff8_0000_0000_0001);
        let lit = Literal::from_constant(&ConstantNode::Double(nan)).unwrap();
        match lit {
            Literal::Double(v) => assert_eq!(v.to_bits(), nan.to_bits()),
            other => panic!("expected double, got {:?}", other),
        }

        // NaN literals with identical payloads are equal
        assert_eq!(Literal::Double(nan), Literal::Double(nan));
        // Signed zeros are distinct values
        assert_ne!(Literal::Float(0.0), Literal::Float(-0.0));
    }

    #[test]
    fn test_unsupported_kinds_rejected() {
        let handle = ConstantNode::MethodHandle("invokedynamic".to_string());
        let err = Literal::from_constant(&handle).unwrap_err();
        assert!(matches!(err, StratumError::UnsupportedConstant(ref k) if k == "method-handle"));

        let ty = ConstantNode::MethodType("(I)V".to_string());
        assert!(Literal::from_constant(&ty).is_err());
    }

    #[test]
    fn test_equal_inputs_convert_equal() {
        let a = Literal::from_constant(&ConstantNode::Str("x".to_string())).unwrap();
        let b = Literal::from_constant(&ConstantNode::Str("x".to_string())).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        assert_eq!(Literal::Int(5).to_string(), "5");
        assert_eq!(Literal::Long(5).to_string(), "5L");
        assert_eq!(Literal::Null.to_string(), "null");
        assert_eq!(Literal::Str("a\"b".to_string()).to_string(), "\"a\\\"b\"");
        assert_eq!(
            Literal::Class("java.lang.Object".to_string()).to_string(),
            "java.lang.Object.class"
        );
    }
}

//! Points-to domain - context-sensitive heap abstractions
//!
//! Value types shared between the solver interface and its clients.
//! Everything is a dense id pair so sets and maps stay cheap and value
//! identity never depends on pointer identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Id of a context-erased abstract heap object (its allocation site)
pub type ObjId = u32;

/// Id of an interned calling context
pub type CtxId = u32;

/// Id of a resolved class
pub type ClassId = u32;

/// Id of a context-erased source variable
pub type BaseVarId = u32;

/// Id of a static field slot
pub type FieldSlotId = u32;

/// A heap object abstracted together with its allocation context
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct CsObj {
    pub obj: ObjId,
    pub ctx: CtxId,
}

impl CsObj {
    pub fn new(obj: ObjId, ctx: CtxId) -> Self {
        Self { obj, ctx }
    }
}

impl fmt::Display for CsObj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "obj{}@ctx{}", self.obj, self.ctx)
    }
}

/// A source variable abstracted together with a calling context
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct CsVar {
    pub base: BaseVarId,
    pub ctx: CtxId,
}

impl CsVar {
    pub fn new(base: BaseVarId, ctx: CtxId) -> Self {
        Self { base, ctx }
    }
}

impl fmt::Display for CsVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "var{}@ctx{}", self.base, self.ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_identity() {
        assert_eq!(CsObj::new(1, 2), CsObj::new(1, 2));
        assert_ne!(CsObj::new(1, 2), CsObj::new(1, 3));
        assert_eq!(CsObj::new(1, 2).to_string(), "obj1@ctx2");
    }
}

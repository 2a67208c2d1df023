//! Escaping-object set
//!
//! The externally visible analysis result: context-erased, deduplicated
//! heap objects that may become visible to more than one thread.

use rustc_hash::FxHashSet;

use crate::features::points_to::domain::{CsObj, ObjId};

/// Set of heap objects that may escape their creating thread
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EscapeSet {
    objs: FxHashSet<ObjId>,
}

impl EscapeSet {
    /// Strip contexts from a closure result and deduplicate
    pub fn from_closure(closure: impl IntoIterator<Item = CsObj>) -> Self {
        Self {
            objs: closure.into_iter().map(|cs| cs.obj).collect(),
        }
    }

    /// Whether the object may escape
    pub fn contains(&self, obj: ObjId) -> bool {
        self.objs.contains(&obj)
    }

    pub fn len(&self) -> usize {
        self.objs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ObjId> + '_ {
        self.objs.iter().copied()
    }
}

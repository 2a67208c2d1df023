//! Points-to layer - interface to a solved points-to fixed point
//!
//! The solver itself is an external collaborator. This feature holds
//! the context-sensitive value types, the query ports clients consume,
//! and an in-memory snapshot implementation used by drivers and tests.

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::{BaseVarId, ClassId, CsObj, CsVar, CtxId, FieldSlotId, ObjId};
pub use infrastructure::{ClassUniverse, PointsToSnapshot};
pub use ports::{PointsToResult, ProgramMetadata};

//! Ports (interfaces) for the points-to layer
//!
//! Clients of a solved points-to fixed point depend on these traits,
//! not on a solver. The snapshot behind them is assumed frozen: nothing
//! here mutates, and results may be cached by callers.

use super::domain::{BaseVarId, ClassId, CsObj, CsVar, FieldSlotId};

/// Queryable view of a solved context-sensitive points-to result
pub trait PointsToResult {
    /// Every context-sensitive object the solver materialized
    fn objects(&self) -> Vec<CsObj>;

    /// Every context-sensitive variable the solver tracked
    fn cs_vars(&self) -> Vec<CsVar>;

    /// Points-to set of one context-sensitive variable
    fn points_to(&self, var: CsVar) -> Vec<CsObj>;

    /// Static field slots with their points-to sets
    fn static_field_slots(&self) -> Vec<(FieldSlotId, Vec<CsObj>)>;

    /// Instance-field relation, one entry per base object holding the
    /// union of targets over all its fields
    fn instance_field_edges(&self) -> Vec<(CsObj, Vec<CsObj>)>;
}

/// Class and method metadata needed by analysis clients
pub trait ProgramMetadata {
    /// Resolve a class by canonical name
    fn resolve_class(&self, canonical_name: &str) -> Option<ClassId>;

    /// Whether the variable is the implicit receiver of a constructor
    /// of the given class
    fn is_constructor_receiver(&self, var: BaseVarId, class: ClassId) -> bool;
}

//! In-memory points-to snapshot
//!
//! A concrete, mutable-while-building implementation of the points-to
//! ports. Analysis drivers freeze one of these per run; tests use it as
//! a deterministic fixture. All query methods return sorted vectors so
//! two identical snapshots always enumerate identically.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::features::points_to::domain::{BaseVarId, ClassId, CsObj, CsVar, FieldSlotId};
use crate::features::points_to::ports::{PointsToResult, ProgramMetadata};

/// In-memory solved points-to result
#[derive(Debug, Default)]
pub struct PointsToSnapshot {
    objects: FxHashSet<CsObj>,
    var_pts: FxHashMap<CsVar, FxHashSet<CsObj>>,
    static_fields: FxHashMap<FieldSlotId, FxHashSet<CsObj>>,
    field_edges: FxHashMap<CsObj, FxHashSet<CsObj>>,
}

impl PointsToSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an object
    pub fn add_object(&mut self, obj: CsObj) {
        self.objects.insert(obj);
    }

    /// Record `var` pointing to `obj`
    pub fn add_points_to(&mut self, var: CsVar, obj: CsObj) {
        self.add_object(obj);
        self.var_pts.entry(var).or_default().insert(obj);
    }

    /// Record a static field slot pointing to `obj`
    pub fn add_static_field(&mut self, slot: FieldSlotId, obj: CsObj) {
        self.add_object(obj);
        self.static_fields.entry(slot).or_default().insert(obj);
    }

    /// Record an instance-field edge from `base` to `target`.
    /// Field identity is not tracked; only the base-to-target relation.
    pub fn add_field_edge(&mut self, base: CsObj, target: CsObj) {
        self.add_object(base);
        self.add_object(target);
        self.field_edges.entry(base).or_default().insert(target);
    }
}

fn sorted<T: Copy + Ord>(set: &FxHashSet<T>) -> Vec<T> {
    let mut out: Vec<T> = set.iter().copied().collect();
    out.sort_unstable();
    out
}

impl PointsToResult for PointsToSnapshot {
    fn objects(&self) -> Vec<CsObj> {
        sorted(&self.objects)
    }

    fn cs_vars(&self) -> Vec<CsVar> {
        let mut out: Vec<CsVar> = self.var_pts.keys().copied().collect();
        out.sort_unstable();
        out
    }

    fn points_to(&self, var: CsVar) -> Vec<CsObj> {
        self.var_pts.get(&var).map(sorted).unwrap_or_default()
    }

    fn static_field_slots(&self) -> Vec<(FieldSlotId, Vec<CsObj>)> {
        let mut out: Vec<(FieldSlotId, Vec<CsObj>)> = self
            .static_fields
            .iter()
            .map(|(&slot, objs)| (slot, sorted(objs)))
            .collect();
        out.sort_unstable_by_key(|(slot, _)| *slot);
        out
    }

    fn instance_field_edges(&self) -> Vec<(CsObj, Vec<CsObj>)> {
        let mut out: Vec<(CsObj, Vec<CsObj>)> = self
            .field_edges
            .iter()
            .map(|(&base, targets)| (base, sorted(targets)))
            .collect();
        out.sort_unstable_by_key(|(base, _)| *base);
        out
    }
}

/// In-memory class universe
///
/// Tracks which classes exist and which variables are constructor
/// receivers of which class.
#[derive(Debug, Default)]
pub struct ClassUniverse {
    classes: FxHashMap<String, ClassId>,
    ctor_receivers: FxHashMap<BaseVarId, ClassId>,
}

impl ClassUniverse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class by canonical name, returning its id.
    /// Idempotent per name.
    pub fn add_class(&mut self, canonical_name: impl Into<String>) -> ClassId {
        let next = self.classes.len() as ClassId;
        *self.classes.entry(canonical_name.into()).or_insert(next)
    }

    /// Mark `var` as the receiver of a constructor of `class`
    pub fn add_constructor_receiver(&mut self, var: BaseVarId, class: ClassId) {
        self.ctor_receivers.insert(var, class);
    }
}

impl ProgramMetadata for ClassUniverse {
    fn resolve_class(&self, canonical_name: &str) -> Option<ClassId> {
        self.classes.get(canonical_name).copied()
    }

    fn is_constructor_receiver(&self, var: BaseVarId, class: ClassId) -> bool {
        self.ctor_receivers.get(&var) == Some(&class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_enumeration_is_sorted() {
        let mut pta = PointsToSnapshot::new();
        pta.add_object(CsObj::new(3, 0));
        pta.add_object(CsObj::new(1, 0));
        pta.add_object(CsObj::new(2, 1));
        assert_eq!(
            pta.objects(),
            vec![CsObj::new(1, 0), CsObj::new(2, 1), CsObj::new(3, 0)]
        );
    }

    #[test]
    fn test_points_to_registers_objects() {
        let mut pta = PointsToSnapshot::new();
        let v = CsVar::new(0, 0);
        let o = CsObj::new(5, 2);
        pta.add_points_to(v, o);
        assert_eq!(pta.points_to(v), vec![o]);
        assert_eq!(pta.objects(), vec![o]);
        // Unknown variables have empty points-to sets
        assert!(pta.points_to(CsVar::new(9, 9)).is_empty());
    }

    #[test]
    fn test_field_edges_deduplicated() {
        let mut pta = PointsToSnapshot::new();
        let a = CsObj::new(1, 0);
        let b = CsObj::new(2, 0);
        pta.add_field_edge(a, b);
        pta.add_field_edge(a, b);
        let edges = pta.instance_field_edges();
        assert_eq!(edges, vec![(a, vec![b])]);
    }

    #[test]
    fn test_class_universe() {
        let mut universe = ClassUniverse::new();
        let thread = universe.add_class("java.lang.Thread");
        assert_eq!(universe.add_class("java.lang.Thread"), thread);
        assert_eq!(universe.resolve_class("java.lang.Thread"), Some(thread));
        assert_eq!(universe.resolve_class("java.lang.Missing"), None);

        universe.add_constructor_receiver(7, thread);
        assert!(universe.is_constructor_receiver(7, thread));
        assert!(!universe.is_constructor_receiver(8, thread));
    }
}

//! Object reachability graph
//!
//! Directed graph over context-sensitive heap objects, built once per
//! run from a frozen points-to result. Field identity is erased:
//! escaping status propagates through any instance field alike. Nodes
//! get a dense index at construction and adjacency is stored as index
//! lists, so traversal never chases hashed keys.

use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::features::points_to::domain::CsObj;
use crate::features::points_to::ports::PointsToResult;

/// Immutable reachability view over a points-to snapshot
#[derive(Debug)]
pub struct ObjGraph {
    nodes: Vec<CsObj>,
    index: FxHashMap<CsObj, usize>,
    succs: Vec<Vec<usize>>,
}

impl ObjGraph {
    /// Build the graph from a solved points-to result
    pub fn build(pta: &dyn PointsToResult) -> Self {
        let nodes = pta.objects();
        let mut index = FxHashMap::default();
        for (i, &obj) in nodes.iter().enumerate() {
            index.insert(obj, i);
        }
        let mut graph = Self {
            succs: vec![Vec::new(); nodes.len()],
            nodes,
            index,
        };
        for (base, targets) in pta.instance_field_edges() {
            let from = graph.intern(base);
            for target in targets {
                let to = graph.intern(target);
                // Duplicate edges can arrive via distinct fields
                if !graph.succs[from].contains(&to) {
                    graph.succs[from].push(to);
                }
            }
        }
        graph
    }

    /// Index an object, admitting ones the snapshot's object
    /// enumeration missed
    fn intern(&mut self, obj: CsObj) -> usize {
        if let Some(&i) = self.index.get(&obj) {
            return i;
        }
        let i = self.nodes.len();
        self.nodes.push(obj);
        self.succs.push(Vec::new());
        self.index.insert(obj, i);
        i
    }

    /// All nodes, in construction order
    pub fn nodes(&self) -> &[CsObj] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Successors of one object through any instance field
    pub fn successors(&self, obj: CsObj) -> impl Iterator<Item = CsObj> + '_ {
        self.index
            .get(&obj)
            .map(|&i| self.succs[i].as_slice())
            .unwrap_or_default()
            .iter()
            .map(move |&i| self.nodes[i])
    }

    /// The smallest superset of `roots` closed under `successors`.
    ///
    /// Worklist traversal with a visited guard so each node expands at
    /// most once; heap graphs are routinely cyclic and the guard is
    /// what makes termination unconditional. Roots unknown to the graph
    /// are kept in the result and expand to nothing.
    pub fn reachable_from(&self, roots: impl IntoIterator<Item = CsObj>) -> FxHashSet<CsObj> {
        let mut visited: FxHashSet<CsObj> = FxHashSet::default();
        let mut queue: VecDeque<CsObj> = roots.into_iter().collect();
        while let Some(obj) = queue.pop_front() {
            if visited.insert(obj) {
                for succ in self.successors(obj) {
                    if !visited.contains(&succ) {
                        queue.push_back(succ);
                    }
                }
            }
        }
        visited
    }
}

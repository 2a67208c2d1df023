//! Context-sensitive thread-escape analysis
//!
//! Classifies which heap objects may become visible to more than one
//! thread, following Naik, Aiken and Whaley (PLDI 2006). An object
//! escapes if it is reachable from a static field, reachable from the
//! receiver of a spawning thread's constructor, or reachable from
//! another escaping object through an instance field.
//!
//! Consumes a solved points-to result; never re-enters the solver.

use rustc_hash::FxHashSet;
use tracing::{info, warn};

use crate::config::AnalysisOptions;
use crate::features::escape::domain::{EscapeSet, ObjGraph};
use crate::features::points_to::domain::CsObj;
use crate::features::points_to::ports::{PointsToResult, ProgramMetadata};

/// Analysis client id, used in log lines
pub const ANALYSIS_ID: &str = "thread-escape";

/// One thread-escape analysis run over one frozen points-to result
pub struct ThreadEscapeAnalysis<'a> {
    pta: &'a dyn PointsToResult,
    metadata: &'a dyn ProgramMetadata,
    options: &'a AnalysisOptions,
}

impl<'a> ThreadEscapeAnalysis<'a> {
    pub fn new(
        pta: &'a dyn PointsToResult,
        metadata: &'a dyn ProgramMetadata,
        options: &'a AnalysisOptions,
    ) -> Self {
        Self {
            pta,
            metadata,
            options,
        }
    }

    /// Run the analysis
    pub fn analyze(&self) -> EscapeSet {
        let graph = ObjGraph::build(self.pta);
        let roots = self.compute_roots();
        let closure = graph.reachable_from(roots);
        let escaping = EscapeSet::from_closure(closure);
        info!(
            analysis = ANALYSIS_ID,
            "found {} out of {} objects",
            escaping.len(),
            graph.node_count()
        );
        escaping
    }

    /// Initial escaping objects from the two root rules
    fn compute_roots(&self) -> FxHashSet<CsObj> {
        let mut roots: FxHashSet<CsObj> = FxHashSet::default();

        // Rule 1: objects reachable from static fields escape
        for (_slot, objs) in self.pta.static_field_slots() {
            roots.extend(objs);
        }

        // Rule 2: objects bound to the receiver of a thread constructor
        // become reachable by the spawned thread once it starts
        match self.metadata.resolve_class(&self.options.thread_class) {
            Some(thread_class) => {
                for var in self.pta.cs_vars() {
                    if self
                        .metadata
                        .is_constructor_receiver(var.base, thread_class)
                    {
                        roots.extend(self.pta.points_to(var));
                    }
                }
            }
            None => {
                // Degraded but valid: the rule contributes no roots
                warn!(
                    analysis = ANALYSIS_ID,
                    class = %self.options.thread_class,
                    "thread class not found, spawn rule disabled"
                );
            }
        }
        roots
    }
}

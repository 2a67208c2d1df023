//! Escape analysis - which heap objects may cross thread boundaries
//!
//! A client of the points-to layer: builds the object reachability
//! graph, seeds it with the static-field and thread-spawn root rules,
//! and closes over instance-field edges.

pub mod application;
pub mod domain;

pub use application::{ThreadEscapeAnalysis, ANALYSIS_ID};
pub use domain::{EscapeSet, ObjGraph};

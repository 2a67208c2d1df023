//! Escape application layer

mod thread_escape;

pub use thread_escape::{ThreadEscapeAnalysis, ANALYSIS_ID};

//! Feature modules
//!
//! Vertical slices: lowering produces the method IR a solver consumes;
//! points_to exposes the solved result; escape is an analysis client of
//! that result.

pub mod escape;
pub mod lowering;
pub mod points_to;

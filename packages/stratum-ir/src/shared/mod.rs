//! Shared module - types common to all features
//!
//! Holds the source-side method representation consumed by the
//! translator. It has zero dependencies on any feature module.

pub mod models;

pub use models::*;

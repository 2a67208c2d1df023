//! Points-to infrastructure - concrete port implementations

mod snapshot;

pub use snapshot::{ClassUniverse, PointsToSnapshot};

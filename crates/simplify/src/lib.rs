//! Douglas–Peucker polyline reduction.
//!
//! Purpose
//! - Reduce an ordered 2D point sequence to a subsequence that stays within
//!   a perpendicular-distance tolerance of the original shape.
//! - Keep the API minimal (KISS, YAGNI): pure functions over point slices,
//!   no I/O, no configuration, no shared state.
//!
//! Entry points
//! - [`reduce`]: points in, reduced points out.
//! - [`reduce_indices`]: same reduction, but returns the surviving indices so
//!   callers can carry per-point side data (timestamps, elevations) along.
//! - [`perpendicular_distance`]: the leaf geometric helper, exposed for
//!   callers that want the raw deviation measure.

pub mod dist;
pub mod reduce;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use dist::perpendicular_distance;
pub use reduce::{reduce, reduce_indices, ReduceError};

/// 2D point/vector type used throughout.
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::dist::perpendicular_distance;
    pub use crate::reduce::{reduce, reduce_indices, ReduceError};
    pub use nalgebra::Vector2 as Vec2;
}

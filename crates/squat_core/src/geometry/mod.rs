//! 2D geometry primitives used by the scorer
//!
//! Re-exports only.

mod angle;
mod point;

pub use angle::compute_angle;
pub use point::Point2D;

//! Application of the Separating Axis Theorem (SAT).
//!
//! Two convex shapes do not intersect if and only if there exists an axis onto which their
//! projections do not overlap. For boxes and triangles the set of candidate axes is finite:
//! face normals, plus cross products between the edge directions of both shapes.
//!
//! Every function of this module returns the first separating axis it finds, or `None` if the
//! shapes intersect.

pub use self::sat_aabb_triangle::aabb_triangle_separating_axis;
pub use self::sat_obb_obb::{obb_obb_separating_axis, SAT_AXIS_EPSILON};

mod sat_aabb_triangle;
mod sat_obb_obb;

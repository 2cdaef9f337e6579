//! Non-persistent geometric queries.
//!
//! The queries of this module decide whether a shape overlaps an axis-aligned box, which is
//! all the rasterizer needs to know about a grid cell.

pub use self::intersection_test::{
    intersection_test_aabb_ball, intersection_test_aabb_capsule, intersection_test_aabb_obb,
    intersection_test_aabb_triangle, intersection_test_obb_obb, AabbIntersection,
};

pub mod intersection_test;
pub mod sat;

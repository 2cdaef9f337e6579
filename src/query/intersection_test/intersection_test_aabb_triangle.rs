use crate::bounding_volume::Aabb;
use crate::query::sat;
use crate::shape::Triangle;

/// Tests if a triangle intersects an AABB.
#[inline]
pub fn intersection_test_aabb_triangle(aabb1: &Aabb, triangle2: &Triangle) -> bool {
    sat::aabb_triangle_separating_axis(aabb1, triangle2).is_none()
}

use crate::bounding_volume::{Aabb, BoundingSphere};
use crate::math::{Real, DIM};

/// Tests if a sphere intersects an AABB.
///
/// The squared distance between the sphere center and the box is accumulated axis by axis and
/// compared to the squared radius. Touching shapes intersect.
#[inline]
pub fn intersection_test_aabb_ball(aabb1: &Aabb, sphere2: &BoundingSphere) -> bool {
    let mut dist_squared: Real = 0.0;

    for i in 0..DIM {
        let c = sphere2.center[i];

        if c < aabb1.mins[i] {
            dist_squared += (c - aabb1.mins[i]) * (c - aabb1.mins[i]);
        } else if c > aabb1.maxs[i] {
            dist_squared += (c - aabb1.maxs[i]) * (c - aabb1.maxs[i]);
        }
    }

    dist_squared <= sphere2.radius * sphere2.radius
}

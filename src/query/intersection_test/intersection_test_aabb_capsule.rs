use crate::bounding_volume::{Aabb, BoundingSphere};
use crate::query::intersection_test_aabb_ball;
use crate::shape::Capsule;

/// Tests if a world-space capsule intersects an AABB.
///
/// The box center is projected on the capsule segment. If the projection falls on an endpoint,
/// the capsule is tested as a sphere centered on that endpoint. Otherwise, the box intersects
/// if it contains the point of the capsule surface closest to its center, or if its center lies
/// within the capsule radius of the segment. The second condition extends the surface-point test
/// to boxes entirely inside the capsule.
///
/// A capsule with a zero-length segment is tested as a sphere.
pub fn intersection_test_aabb_capsule(aabb1: &Aabb, capsule2: &Capsule) -> bool {
    let center = aabb1.center();
    let segment = &capsule2.segment;
    let t = segment.project_local_point_parameter(&center);

    if t <= 0.0 || t >= 1.0 {
        let end = if t <= 0.0 { segment.a } else { segment.b };
        return intersection_test_aabb_ball(aabb1, &BoundingSphere::new(end, capsule2.radius));
    }

    let closest = segment.a + segment.scaled_direction() * t;
    let to_center = center - closest;
    let dist = to_center.norm();

    if dist <= capsule2.radius {
        return true;
    }

    let surface_pt = closest + to_center * (capsule2.radius / dist);
    aabb1.contains_local_point(&surface_pt)
}

use crate::bounding_volume::Aabb;
use crate::query::sat;
use crate::shape::OrientedBox;

/// Tests if the interiors of two oriented boxes overlap.
#[inline]
pub fn intersection_test_obb_obb(obb1: &OrientedBox, obb2: &OrientedBox) -> bool {
    sat::obb_obb_separating_axis(obb1, obb2).is_none()
}

/// Tests if the interiors of an AABB and an oriented box overlap.
///
/// The AABB is handled as an oriented box with an identity rotation.
#[inline]
pub fn intersection_test_aabb_obb(aabb1: &Aabb, obb2: &OrientedBox) -> bool {
    intersection_test_obb_obb(&OrientedBox::from_aabb(aabb1), obb2)
}

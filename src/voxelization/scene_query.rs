use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::shape::ShapeInstance;

/// A scene the voxelizer can ask for shapes.
///
/// This is the only thing the voxelizer needs to know about a scene: how shapes are stored,
/// enumerated or filtered is up to the implementor.
pub trait SceneQuery {
    /// The shapes, placed in world-space, whose bounds may intersect `aabb`.
    ///
    /// Returning shapes that do not intersect `aabb` is allowed: they are discarded by the
    /// voxelizer.
    fn shapes_intersecting_aabb(&self, aabb: &Aabb) -> Vec<ShapeInstance>;
}

impl SceneQuery for [ShapeInstance] {
    fn shapes_intersecting_aabb(&self, aabb: &Aabb) -> Vec<ShapeInstance> {
        self.iter()
            .filter(|instance| instance.aabb().intersects(aabb))
            .cloned()
            .collect()
    }
}

impl SceneQuery for Vec<ShapeInstance> {
    fn shapes_intersecting_aabb(&self, aabb: &Aabb) -> Vec<ShapeInstance> {
        self.as_slice().shapes_intersecting_aabb(aabb)
    }
}

use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Real};
use crate::shape::ConvexMesh;

impl ConvexMesh {
    /// Computes the world-space [`Aabb`] of this mesh, transformed by `pos`.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        Aabb::from_points(self.vertices().iter().map(|pt| pos * pt))
    }

    /// Computes the local-space [`Aabb`] of this mesh.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_points(self.vertices().iter().copied())
    }
}

use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Real};
use crate::shape::Compound;

impl Compound {
    /// Computes the world-space [`Aabb`] of this compound, transformed by `pos`.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        self.local_aabb().transform_by(pos)
    }
}

use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Real, Vector};
use crate::shape::Capsule;

impl Capsule {
    /// The world-space [`Aabb`] of this capsule, transformed by `pos`.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        self.transform_by(pos).local_aabb()
    }

    /// The local-space [`Aabb`] of this capsule.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        let a = self.segment.a.coords;
        let b = self.segment.b.coords;
        let mins = a.inf(&b) - Vector::repeat(self.radius);
        let maxs = a.sup(&b) + Vector::repeat(self.radius);
        Aabb::new(mins.into(), maxs.into())
    }
}

use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Real};
use crate::shape::HeightField;

impl HeightField {
    /// The world-space bounds of this height-field placed at `pos`.
    ///
    /// The bounds of the whole sample lattice are transformed, so a rotated height-field gets
    /// loose bounds.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        self.local_aabb().transform_by(pos)
    }

    /// The bounds of the sample lattice, in the height-field local space.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        *self.root_aabb()
    }
}

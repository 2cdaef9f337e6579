use crate::bounding_volume::BoundingSphere;
use crate::math::{Isometry, Point, Real, Vector};

/// A sphere centered at the origin of its local frame.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Ball {
    /// The sphere radius.
    pub radius: Real,
}

impl Ball {
    /// A ball of the given `radius`.
    #[inline]
    pub fn new(radius: Real) -> Ball {
        Ball { radius }
    }

    /// This ball under the non-uniform scale `scale`.
    ///
    /// A non-uniformly scaled ball is not a ball anymore: the radius is scaled by the smallest
    /// absolute scale component so the result stays inscribed in the exact scaled shape.
    #[inline]
    pub fn scaled(self, scale: &Vector<Real>) -> Self {
        Self::new(self.radius * scale.abs().min())
    }

    /// The world-space sphere occupied by this ball once placed at `pos`.
    #[inline]
    pub fn bounding_sphere(&self, pos: &Isometry<Real>) -> BoundingSphere {
        BoundingSphere::new(Point::from(pos.translation.vector), self.radius)
    }
}

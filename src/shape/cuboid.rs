use crate::math::{Real, Vector};

/// A box centered at the origin of its local frame.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    /// Half the box size along each local axis.
    pub half_extents: Vector<Real>,
}

impl Cuboid {
    /// A box spanning `[-half_extents, half_extents]`.
    ///
    /// Components must be non-negative. A zero component gives a flat box.
    #[inline]
    pub fn new(half_extents: Vector<Real>) -> Cuboid {
        Cuboid { half_extents }
    }

    /// This box with its half-extents multiplied component-wise by `scale`.
    ///
    /// Negative scale components mirror the box, which leaves its shape unchanged.
    #[inline]
    pub fn scaled(self, scale: &Vector<Real>) -> Self {
        Self::new(self.half_extents.component_mul(scale).abs())
    }
}

use crate::bounding_volume::{Aabb, BoundingSphere};
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::Ball;

/// Computes the Axis-Aligned Bounding Box of a ball centered at `center`.
#[inline]
pub fn ball_aabb(center: &Point<Real>, radius: Real) -> Aabb {
    Aabb::from_half_extents(*center, Vector::repeat(radius))
}

impl Ball {
    /// Computes the world-space [`Aabb`] of this ball transformed by `pos`.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        ball_aabb(&Point::from(pos.translation.vector), self.radius)
    }

    /// Computes the local-space [`Aabb`] of this ball.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        ball_aabb(&Point::origin(), self.radius)
    }
}

impl BoundingSphere {
    /// Computes the [`Aabb`] of this sphere.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        ball_aabb(self.center(), self.radius())
    }
}

//! Bounding sphere.

use crate::bounding_volume::BoundingVolume;
use crate::math::{Isometry, Point, Real};

/// A sphere placed in world-space.
///
/// This is the sphere proxy tested against grid cells: unlike [`Ball`](crate::shape::Ball),
/// it carries its own center so it can be built once per shape instance and reused for every
/// cell of the instance's local grid.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct BoundingSphere {
    /// The sphere center.
    pub center: Point<Real>,
    /// The sphere radius.
    pub radius: Real,
}

impl BoundingSphere {
    /// Creates a new bounding sphere.
    pub fn new(center: Point<Real>, radius: Real) -> BoundingSphere {
        BoundingSphere { center, radius }
    }

    /// The bounding sphere center.
    #[inline]
    pub fn center(&self) -> &Point<Real> {
        &self.center
    }

    /// The bounding sphere radius.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// Transforms this bounding sphere by `m`.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> BoundingSphere {
        BoundingSphere::new(m * self.center, self.radius)
    }
}

impl BoundingVolume for BoundingSphere {
    #[inline]
    fn center(&self) -> Point<Real> {
        *self.center()
    }

    #[inline]
    fn intersects(&self, other: &BoundingSphere) -> bool {
        let delta_pos = other.center - self.center;
        let distance_squared = delta_pos.norm_squared();
        let sum_radius = self.radius + other.radius;

        distance_squared <= sum_radius * sum_radius
    }

    #[inline]
    fn contains(&self, other: &BoundingSphere) -> bool {
        let delta_pos = other.center - self.center;
        let distance = delta_pos.norm();

        distance + other.radius <= self.radius
    }

    fn merge(&mut self, other: &BoundingSphere) {
        *self = self.merged(other);
    }

    fn merged(&self, other: &BoundingSphere) -> BoundingSphere {
        let delta = other.center - self.center;
        let dist = delta.norm();

        if dist + other.radius <= self.radius {
            return *self;
        }

        if dist + self.radius <= other.radius {
            return *other;
        }

        // Neither sphere contains the other, so `dist > 0`.
        let radius = (dist + self.radius + other.radius) / 2.0;
        let center = self.center + delta * ((radius - self.radius) / dist);
        BoundingSphere::new(center, radius)
    }

    #[inline]
    fn loosened(&self, amount: Real) -> BoundingSphere {
        BoundingSphere::new(self.center, self.radius + amount)
    }
}

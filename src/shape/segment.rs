use crate::math::{Isometry, Point, Real, Vector};

/// The straight line piece between two points.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Segment {
    /// Start point.
    pub a: Point<Real>,
    /// End point.
    pub b: Point<Real>,
}

impl Segment {
    /// The segment going from `a` to `b`.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Self {
        Self { a, b }
    }

    /// The vector `b - a`.
    #[inline]
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// Distance between the endpoints.
    #[inline]
    pub fn length(&self) -> Real {
        self.scaled_direction().norm()
    }

    /// This segment with both endpoints moved by `m`.
    pub fn transformed(&self, m: &Isometry<Real>) -> Self {
        Self::new(m * self.a, m * self.b)
    }

    /// This segment with both endpoints scaled component-wise by `scale`.
    pub fn scaled(&self, scale: &Vector<Real>) -> Self {
        Self::new(
            self.a.coords.component_mul(scale).into(),
            self.b.coords.component_mul(scale).into(),
        )
    }

    /// The parameter, clamped to `[0, 1]`, of the point of this segment closest to `pt`.
    ///
    /// Returns `0` if both endpoints coincide. Any other segment, however short, is projected
    /// on exactly.
    #[inline]
    pub fn project_local_point_parameter(&self, pt: &Point<Real>) -> Real {
        let ab = self.scaled_direction();
        let sqnab = ab.norm_squared();

        if sqnab == 0.0 {
            return 0.0;
        }

        ((pt - self.a).dot(&ab) / sqnab).clamp(0.0, 1.0)
    }
}

use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::Segment;

/// A segment swept by a ball.
///
/// A capsule whose segment has zero length is a ball.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Capsule {
    /// The capsule axis, in the capsule local space.
    pub segment: Segment,
    /// The radius of the swept ball.
    pub radius: Real,
}

impl Capsule {
    /// A capsule of the given `radius` swept along the segment from `a` to `b`.
    pub fn new(a: Point<Real>, b: Point<Real>, radius: Real) -> Self {
        Self {
            segment: Segment::new(a, b),
            radius,
        }
    }

    fn along(axis: Vector<Real>, half_height: Real, radius: Real) -> Self {
        let tip = Point::from(axis * half_height);
        Self::new(-tip, tip, radius)
    }

    /// A capsule centered at the origin, with its axis along `x`.
    pub fn new_x(half_height: Real, radius: Real) -> Self {
        Self::along(Vector::x(), half_height, radius)
    }

    /// A capsule centered at the origin, with its axis along `y`.
    pub fn new_y(half_height: Real, radius: Real) -> Self {
        Self::along(Vector::y(), half_height, radius)
    }

    /// A capsule centered at the origin, with its axis along `z`.
    pub fn new_z(half_height: Real, radius: Real) -> Self {
        Self::along(Vector::z(), half_height, radius)
    }

    /// Half the length of the capsule axis.
    pub fn half_height(&self) -> Real {
        self.segment.length() * 0.5
    }

    /// The middle of the capsule axis.
    pub fn center(&self) -> Point<Real> {
        na::center(&self.segment.a, &self.segment.b)
    }

    /// This capsule with its axis moved by `pos`.
    pub fn transform_by(&self, pos: &Isometry<Real>) -> Self {
        Self {
            segment: self.segment.transformed(pos),
            radius: self.radius,
        }
    }

    /// This capsule with its axis endpoints scaled component-wise by `scale`.
    ///
    /// The radius is scaled by the smallest absolute component of `scale`, so the result stays
    /// a capsule.
    pub fn scaled(self, scale: &Vector<Real>) -> Self {
        Self {
            segment: self.segment.scaled(scale),
            radius: self.radius * scale.abs().min(),
        }
    }
}

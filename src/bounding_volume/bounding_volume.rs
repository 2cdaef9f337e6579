use crate::math::{Point, Real};

/// A simple volume enclosing a shape, with cheap overlap and containment tests.
///
/// Volumes can be grown by merging them together or by adding a margin.
pub trait BoundingVolume {
    /// The center of this volume.
    fn center(&self) -> Point<Real>;

    /// Checks if this bounding volume intersects another one. Touching volumes intersect.
    fn intersects(&self, _: &Self) -> bool;

    /// Checks if this bounding volume contains another one, boundaries included.
    fn contains(&self, _: &Self) -> bool;

    /// Grows this volume so it also encloses `other`.
    fn merge(&mut self, other: &Self);

    /// The smallest volume of this kind enclosing both `self` and `other`.
    fn merged(&self, other: &Self) -> Self;

    /// Enlarges this bounding volume by the given non-negative margin.
    fn loosened(&self, _: Real) -> Self;
}

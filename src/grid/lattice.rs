//! Snapping of world-space coordinates to the integer lattice spanned by a cell size.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector, DEFAULT_EPSILON, DIM};
use crate::VoxelError;

/// Relative tolerance under which a lattice coordinate is considered integral.
pub(crate) const LATTICE_TOLERANCE: Real = DEFAULT_EPSILON * 16.0;

#[inline]
fn snap(q: Real) -> Option<Real> {
    let r = q.round();
    ((q - r).abs() <= LATTICE_TOLERANCE * q.abs().max(1.0)).then_some(r)
}

/// `floor(q)`, unless `q` is within rounding error of an integer.
#[inline]
pub(crate) fn lattice_floor(q: Real) -> Real {
    snap(q).unwrap_or_else(|| q.floor())
}

/// `ceil(q)`, unless `q` is within rounding error of an integer.
#[inline]
pub(crate) fn lattice_ceil(q: Real) -> Real {
    snap(q).unwrap_or_else(|| q.ceil())
}

/// A half-open range of lattice cells `[mins, maxs)` along each axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct LatticeRange {
    pub mins: Point<i32>,
    pub maxs: Point<i32>,
}

impl LatticeRange {
    /// Snaps `aabb` outward to the lattice spanned by `cell_size`.
    ///
    /// An axis of zero width still covers one cell.
    pub fn snap(cell_size: &Vector<Real>, aabb: &Aabb) -> Result<Self, VoxelError> {
        if !aabb.is_valid() {
            return Err(VoxelError::InvalidArgument(
                "bounds must be finite, with mins <= maxs",
            ));
        }

        let mut mins = Point::origin();
        let mut maxs = Point::origin();

        for i in 0..DIM {
            let lo = lattice_floor(aabb.mins[i] / cell_size[i]);
            let hi = lattice_ceil(aabb.maxs[i] / cell_size[i]).max(lo + 1.0);

            if lo < i32::MIN as Real || hi > i32::MAX as Real || hi - lo > i32::MAX as Real {
                return Err(VoxelError::InvalidArgument(
                    "bounds are too large for the cell size",
                ));
            }

            mins[i] = lo as i32;
            maxs[i] = hi as i32;
        }

        Ok(Self { mins, maxs })
    }

    /// Number of cells along each axis.
    #[inline]
    pub fn extents(&self) -> Vector<u32> {
        (self.maxs - self.mins).map(|e| e as u32)
    }

    /// The intersection of both ranges, if it is not empty.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let mins = self.mins.coords.sup(&other.mins.coords);
        let maxs = self.maxs.coords.inf(&other.maxs.coords);

        if (0..DIM).all(|i| mins[i] < maxs[i]) {
            Some(Self {
                mins: mins.into(),
                maxs: maxs.into(),
            })
        } else {
            None
        }
    }

    /// Is `other` entirely inside of this range?
    pub fn contains(&self, other: &Self) -> bool {
        (0..DIM).all(|i| self.mins[i] <= other.mins[i] && other.maxs[i] <= self.maxs[i])
    }

    /// Moves this range so it fits inside of `outer`, preserving its extents where possible.
    ///
    /// This resolves the extra cell a zero-width axis gains when it lies on the max face of
    /// `outer`.
    pub fn shifted_into(mut self, outer: &Self) -> Self {
        for i in 0..DIM {
            if self.maxs[i] > outer.maxs[i] {
                let shift = self.maxs[i] - outer.maxs[i];
                self.maxs[i] -= shift;
                self.mins[i] = (self.mins[i] - shift).max(outer.mins[i]);
            }
        }

        self
    }

    /// The world-space box covered by this range.
    pub fn to_aabb(&self, cell_size: &Vector<Real>) -> Aabb {
        Aabb::new(
            self.mins.coords.cast::<Real>().component_mul(cell_size).into(),
            self.maxs.coords.cast::<Real>().component_mul(cell_size).into(),
        )
    }
}

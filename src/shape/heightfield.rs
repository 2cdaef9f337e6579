//! Definition of the height-field shape.

use na::DMatrix;

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector, Vector2};
use crate::VoxelError;

/// How a height-field is sampled between its samples.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HeightSampling {
    /// Use the height of the closest sample.
    #[default]
    Nearest,
    /// Interpolate bilinearly between the four samples surrounding the query point.
    Bilinear,
}

/// A terrain given as a regular grid of decoded heights.
///
/// The sample at row `i` and column `j` lies at the local point
/// `(j * spacing.x, i * spacing.y, heights[(i, j)])`: rows run along the local `y` axis,
/// columns along the local `x` axis, and heights along the local `z` axis.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct HeightField {
    heights: DMatrix<Real>,
    spacing: Vector2<Real>,
    aabb: Aabb,
}

impl HeightField {
    /// Initializes a new height-field with the given heights and sample spacing.
    ///
    /// Fails with [`VoxelError::InvalidArgument`] if there are less than 2 rows or columns,
    /// if the spacing is not positive, or if a height is not finite.
    pub fn new(heights: DMatrix<Real>, spacing: Vector2<Real>) -> Result<Self, VoxelError> {
        if heights.nrows() < 2 || heights.ncols() < 2 {
            return Err(VoxelError::InvalidArgument(
                "a height-field needs at least 2 rows and 2 columns",
            ));
        }

        if !spacing.iter().all(|s| s.is_finite() && *s > 0.0) {
            return Err(VoxelError::InvalidArgument(
                "the height-field sample spacing must be positive",
            ));
        }

        if !heights.iter().all(|h| h.is_finite()) {
            return Err(VoxelError::InvalidArgument(
                "the height-field heights must be finite",
            ));
        }

        let aabb = Self::compute_aabb(&heights, &spacing);

        Ok(Self {
            heights,
            spacing,
            aabb,
        })
    }

    fn compute_aabb(heights: &DMatrix<Real>, spacing: &Vector2<Real>) -> Aabb {
        let extents_x = (heights.ncols() - 1) as Real * spacing.x;
        let extents_y = (heights.nrows() - 1) as Real * spacing.y;

        Aabb::new(
            Point::new(0.0, 0.0, heights.min()),
            Point::new(extents_x, extents_y, heights.max()),
        )
    }

    /// The number of sample rows, along the local `y` axis.
    pub fn nrows(&self) -> usize {
        self.heights.nrows()
    }

    /// The number of sample columns, along the local `x` axis.
    pub fn ncols(&self) -> usize {
        self.heights.ncols()
    }

    /// The height samples.
    pub fn heights(&self) -> &DMatrix<Real> {
        &self.heights
    }

    /// The distance between two consecutive samples along the local `x` and `y` axes.
    pub fn spacing(&self) -> &Vector2<Real> {
        &self.spacing
    }

    /// The local-space bounding box of all the samples.
    pub fn root_aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// The height of the surface above the local point `(x, y)`.
    ///
    /// Returns `None` if the point is outside of the height-field footprint.
    pub fn height_at(&self, x: Real, y: Real, sampling: HeightSampling) -> Option<Real> {
        if !self.aabb.contains_local_point(&Point::new(x, y, self.aabb.mins.z)) {
            return None;
        }

        let max_j = self.ncols() - 1;
        let max_i = self.nrows() - 1;
        let fj = x / self.spacing.x;
        let fi = y / self.spacing.y;

        match sampling {
            HeightSampling::Nearest => {
                let j = (fj.round() as usize).min(max_j);
                let i = (fi.round() as usize).min(max_i);
                Some(self.heights[(i, j)])
            }
            HeightSampling::Bilinear => {
                let j = (fj.floor() as usize).min(max_j - 1);
                let i = (fi.floor() as usize).min(max_i - 1);
                let tx = (fj - j as Real).clamp(0.0, 1.0);
                let ty = (fi - i as Real).clamp(0.0, 1.0);

                let h00 = self.heights[(i, j)];
                let h01 = self.heights[(i, j + 1)];
                let h10 = self.heights[(i + 1, j)];
                let h11 = self.heights[(i + 1, j + 1)];

                let bottom = h00 + (h01 - h00) * tx;
                let top = h10 + (h11 - h10) * tx;
                Some(bottom + (top - bottom) * ty)
            }
        }
    }

    /// Computes a scaled version of this height-field.
    ///
    /// The spacing is scaled by the absolute `x` and `y` scale components and the heights by
    /// the `z` component.
    pub fn scaled(mut self, scale: &Vector<Real>) -> Self {
        self.spacing.x *= scale.x.abs();
        self.spacing.y *= scale.y.abs();
        self.heights *= scale.z;
        self.aabb = Self::compute_aabb(&self.heights, &self.spacing);
        self
    }
}

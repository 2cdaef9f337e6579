use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::grid::lattice::{lattice_floor, LatticeRange};
use crate::math::{Point, Real, Vector, DIM};
use crate::VoxelError;

/// A uniform axis-aligned grid of cells.
///
/// The bounds of a grid always lie on the lattice spanned by its cell size: `bounds.mins` and
/// `bounds.maxs` are integer multiples of `cell_size` on every axis. Cells are addressed either
/// by an integer coordinate in `[0, cell_counts)` or by a linear index, with `x` varying
/// fastest:
///
/// ```text
/// index = x + y * cell_counts.x + z * cell_counts.x * cell_counts.y
/// ```
///
/// A grid built with [`Grid::sub_grid`] also records the coordinate of its first cell in its
/// parent grid, see [`Grid::offset`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Grid {
    cell_size: Vector<Real>,
    bounds: Aabb,
    cell_counts: Vector<u32>,
    num_cells: usize,
    lattice_origin: Point<i32>,
    offset: Option<Vector<i32>>,
}

impl Grid {
    /// Creates a grid covering `bounds`, snapped outward to multiples of `cell_size`.
    ///
    /// An axis along which `bounds` is flat still gets one cell. Fails with
    /// [`VoxelError::InvalidArgument`] if a component of `cell_size` is not positive and finite,
    /// if `bounds` is not a valid box, or if the number of cells does not fit in memory indices.
    ///
    /// # Example
    ///
    /// ```
    /// # #[cfg(all(feature = "dim3", feature = "f32"))] {
    /// use voxelate3d::bounding_volume::Aabb;
    /// use voxelate3d::grid::Grid;
    /// use voxelate3d::math::{Point, Vector};
    ///
    /// let bounds = Aabb::new(Point::new(0.0, 0.0, 0.0), Point::new(2.0, 2.0, 2.0));
    /// let grid = Grid::new(Vector::repeat(1.0), &bounds).unwrap();
    ///
    /// assert_eq!(grid.num_cells(), 8);
    /// assert_eq!(grid.index_of_coordinate(&Point::new(1, 1, 1)), Ok(7));
    /// # }
    /// ```
    pub fn new(cell_size: Vector<Real>, bounds: &Aabb) -> Result<Self, VoxelError> {
        if !cell_size.iter().all(|s| s.is_finite() && *s > 0.0) {
            return Err(VoxelError::InvalidArgument(
                "the cell size must be positive and finite",
            ));
        }

        let range = LatticeRange::snap(&cell_size, bounds)?;
        Self::from_range(cell_size, range, None)
    }

    fn from_range(
        cell_size: Vector<Real>,
        range: LatticeRange,
        offset: Option<Vector<i32>>,
    ) -> Result<Self, VoxelError> {
        let cell_counts = range.extents();
        let num_cells = cell_counts
            .iter()
            .try_fold(1usize, |acc, n| acc.checked_mul(*n as usize))
            .ok_or(VoxelError::InvalidArgument("too many cells"))?;

        Ok(Self {
            cell_size,
            bounds: range.to_aabb(&cell_size),
            cell_counts,
            num_cells,
            lattice_origin: range.mins,
            offset,
        })
    }

    /// Creates a grid covering the part of this grid overlapped by `bounds`.
    ///
    /// The result shares the cell size and the lattice of this grid, and its
    /// [`Grid::offset`] is the coordinate, in this grid, of its first cell. Fails with
    /// [`VoxelError::OutOfBounds`] if `bounds` is not inside of this grid's bounds.
    pub fn sub_grid(&self, bounds: &Aabb) -> Result<Self, VoxelError> {
        if !self.bounds.contains(bounds) {
            return Err(VoxelError::OutOfBounds);
        }

        let parent = self.lattice_range();
        let range = LatticeRange::snap(&self.cell_size, bounds)?.shifted_into(&parent);

        if !parent.contains(&range) {
            return Err(VoxelError::OutOfBounds);
        }

        let offset = range.mins - parent.mins;
        Self::from_range(self.cell_size, range, Some(offset))
    }

    /// The size of every cell of this grid.
    #[inline]
    pub fn cell_size(&self) -> &Vector<Real> {
        &self.cell_size
    }

    /// The world-space bounds of this grid.
    #[inline]
    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    /// The number of cells along each axis.
    #[inline]
    pub fn cell_counts(&self) -> &Vector<u32> {
        &self.cell_counts
    }

    /// The total number of cells of this grid.
    #[inline]
    pub fn num_cells(&self) -> usize {
        self.num_cells
    }

    /// The coordinate of the first cell of this grid in its parent grid.
    ///
    /// This is `None` unless the grid was created with [`Grid::sub_grid`].
    #[inline]
    pub fn offset(&self) -> Option<&Vector<i32>> {
        self.offset.as_ref()
    }

    /// The position of `bounds.mins` on the lattice spanned by the cell size, i.e.,
    /// `bounds.mins / cell_size`.
    #[inline]
    pub fn lattice_origin(&self) -> &Point<i32> {
        &self.lattice_origin
    }

    pub(crate) fn lattice_range(&self) -> LatticeRange {
        LatticeRange {
            mins: self.lattice_origin,
            maxs: self.lattice_origin + self.cell_counts.cast::<i32>(),
        }
    }

    /// Is `index` the linear index of a cell of this grid?
    #[inline]
    pub fn is_index_valid(&self, index: usize) -> bool {
        index < self.num_cells
    }

    /// Is `coordinate` the coordinate of a cell of this grid?
    #[inline]
    pub fn is_coordinate_valid(&self, coordinate: &Point<i32>) -> bool {
        (0..DIM).all(|i| coordinate[i] >= 0 && (coordinate[i] as u32) < self.cell_counts[i])
    }

    /// Is the world-space point inside of this grid's bounds or on its boundary?
    #[inline]
    pub fn is_point_in_bounds(&self, point: &Point<Real>) -> bool {
        self.bounds.contains_local_point(point)
    }

    /// Are the bounds of `other` inside of this grid's bounds?
    ///
    /// Bounds touching this grid's boundary from the inside are inside.
    #[inline]
    pub fn is_grid_inside(&self, other: &Grid) -> bool {
        self.bounds.contains(&other.bounds)
    }

    #[inline]
    pub(crate) fn linearize(&self, coordinate: &Point<i32>) -> usize {
        let nx = self.cell_counts.x as usize;
        let ny = self.cell_counts.y as usize;
        coordinate.x as usize + coordinate.y as usize * nx + coordinate.z as usize * nx * ny
    }

    /// The linear index of the cell at `coordinate`.
    pub fn index_of_coordinate(&self, coordinate: &Point<i32>) -> Result<usize, VoxelError> {
        if !self.is_coordinate_valid(coordinate) {
            return Err(VoxelError::InvalidCoordinate {
                coordinate: *coordinate,
                dimensions: self.cell_counts,
            });
        }

        Ok(self.linearize(coordinate))
    }

    /// The coordinate of the cell with the linear index `index`.
    pub fn coordinate_of_index(&self, index: usize) -> Result<Point<i32>, VoxelError> {
        if !self.is_index_valid(index) {
            return Err(VoxelError::InvalidIndex {
                index,
                len: self.num_cells,
            });
        }

        let nx = self.cell_counts.x as usize;
        let ny = self.cell_counts.y as usize;
        Ok(Point::new(
            (index % nx) as i32,
            ((index / nx) % ny) as i32,
            (index / (nx * ny)) as i32,
        ))
    }

    /// The coordinate of the cell containing the world-space point `point`.
    ///
    /// A point on the boundary between two cells belongs to the cell with the larger
    /// coordinate, except on the max faces of the grid which belong to the last cells.
    /// Fails with [`VoxelError::OutOfBounds`] if the point is outside of the grid bounds.
    pub fn coordinate_of_point(&self, point: &Point<Real>) -> Result<Point<i32>, VoxelError> {
        if !self.is_point_in_bounds(point) {
            return Err(VoxelError::OutOfBounds);
        }

        let mut coordinate = Point::origin();

        for i in 0..DIM {
            let cell = lattice_floor(point[i] / self.cell_size[i]) as i64
                - self.lattice_origin[i] as i64;
            coordinate[i] = cell.clamp(0, self.cell_counts[i] as i64 - 1) as i32;
        }

        Ok(coordinate)
    }

    /// The linear index of the cell containing the world-space point `point`.
    pub fn index_of_point(&self, point: &Point<Real>) -> Result<usize, VoxelError> {
        let coordinate = self.coordinate_of_point(point)?;
        Ok(self.linearize(&coordinate))
    }

    #[inline]
    pub(crate) fn cell_aabb_unchecked(&self, coordinate: &Point<i32>) -> Aabb {
        let lattice = self.lattice_origin.coords + coordinate.coords;
        let mins = lattice.cast::<Real>().component_mul(&self.cell_size);
        let maxs = lattice
            .add_scalar(1)
            .cast::<Real>()
            .component_mul(&self.cell_size);
        Aabb::new(mins.into(), maxs.into())
    }

    /// The world-space box of the cell with the linear index `index`.
    pub fn cell_aabb(&self, index: usize) -> Result<Aabb, VoxelError> {
        let coordinate = self.coordinate_of_index(index)?;
        Ok(self.cell_aabb_unchecked(&coordinate))
    }

    /// The world-space box of the cell at `coordinate`.
    pub fn cell_aabb_at_coordinate(&self, coordinate: &Point<i32>) -> Result<Aabb, VoxelError> {
        let _ = self.index_of_coordinate(coordinate)?;
        Ok(self.cell_aabb_unchecked(coordinate))
    }

    /// The world-space box of the cell containing `point`.
    pub fn cell_aabb_at_point(&self, point: &Point<Real>) -> Result<Aabb, VoxelError> {
        let coordinate = self.coordinate_of_point(point)?;
        Ok(self.cell_aabb_unchecked(&coordinate))
    }

    /// The world-space center of the cell at `coordinate`.
    pub fn cell_center(&self, coordinate: &Point<i32>) -> Result<Point<Real>, VoxelError> {
        self.cell_aabb_at_coordinate(coordinate)
            .map(|aabb| aabb.center())
    }

    fn covered_range(&self, aabb: &Aabb) -> Option<LatticeRange> {
        LatticeRange::snap(&self.cell_size, aabb)
            .ok()?
            .intersection(&self.lattice_range())
    }

    /// The coordinates of all the cells overlapping `aabb` once snapped to the grid lattice.
    ///
    /// Cells outside of this grid are skipped. Coordinates are sorted by increasing linear
    /// index.
    pub fn coordinates_in_aabb(&self, aabb: &Aabb) -> Vec<Point<i32>> {
        let Some(range) = self.covered_range(aabb) else {
            return Vec::new();
        };

        let origin = self.lattice_origin.coords;
        let extents = range.extents();
        let mut result = Vec::with_capacity(extents.iter().map(|e| *e as usize).product());

        for z in range.mins.z..range.maxs.z {
            for y in range.mins.y..range.maxs.y {
                for x in range.mins.x..range.maxs.x {
                    result.push(Point::new(x, y, z) - origin);
                }
            }
        }

        result
    }

    /// The linear indices of all the cells overlapping `aabb` once snapped to the grid lattice.
    ///
    /// Cells outside of this grid are skipped. Indices are sorted in increasing order.
    pub fn indices_in_aabb(&self, aabb: &Aabb) -> Vec<usize> {
        self.coordinates_in_aabb(aabb)
            .iter()
            .map(|coordinate| self.linearize(coordinate))
            .collect()
    }
}

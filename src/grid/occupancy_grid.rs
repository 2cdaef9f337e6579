use crate::bounding_volume::Aabb;
use crate::grid::Grid;
use crate::math::{Point, Real, DIM};
use crate::VoxelError;

/// A boolean operation used to combine two occupancy grids.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BooleanOp {
    /// A cell stays occupied if it is occupied in both grids.
    And,
    /// A cell becomes occupied if it is occupied in either grid.
    Or,
    /// A cell is occupied if it is occupied in exactly one of the grids.
    Xor,
}

impl BooleanOp {
    #[inline]
    fn apply(self, lhs: bool, rhs: bool) -> bool {
        match self {
            BooleanOp::And => lhs && rhs,
            BooleanOp::Or => lhs || rhs,
            BooleanOp::Xor => lhs ^ rhs,
        }
    }
}

/// One boolean per cell of a [`Grid`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct OccupancyGrid {
    grid: Grid,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// Creates an occupancy grid with all the cells of `grid` empty.
    pub fn new(grid: Grid) -> Self {
        Self {
            cells: vec![false; grid.num_cells()],
            grid,
        }
    }

    /// Creates an occupancy grid from existing cell values, in linear index order.
    ///
    /// Fails with [`VoxelError::SizeMismatch`] if `cells` does not have one value per cell.
    pub fn from_cells(grid: Grid, cells: Vec<bool>) -> Result<Self, VoxelError> {
        if cells.len() != grid.num_cells() {
            return Err(VoxelError::SizeMismatch {
                expected: grid.num_cells(),
                found: cells.len(),
            });
        }

        Ok(Self { grid, cells })
    }

    /// The grid indexing this occupancy grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The cell values, in linear index order.
    #[inline]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    /// The number of occupied cells.
    pub fn num_occupied(&self) -> usize {
        self.cells.iter().filter(|c| **c).count()
    }

    /// Is every cell empty?
    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Marks every cell as empty.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Sets every cell to `value`.
    pub fn fill(&mut self, value: bool) {
        self.cells.fill(value);
    }

    /// Is the cell with the linear index `index` occupied?
    pub fn get(&self, index: usize) -> Result<bool, VoxelError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(VoxelError::InvalidIndex {
                index,
                len: self.cells.len(),
            })
    }

    /// Sets the value of the cell with the linear index `index`.
    pub fn set(&mut self, index: usize, value: bool) -> Result<(), VoxelError> {
        let len = self.cells.len();
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(VoxelError::InvalidIndex { index, len })?;
        *cell = value;
        Ok(())
    }

    /// Is the cell at `coordinate` occupied?
    pub fn get_at_coordinate(&self, coordinate: &Point<i32>) -> Result<bool, VoxelError> {
        let index = self.grid.index_of_coordinate(coordinate)?;
        Ok(self.cells[index])
    }

    /// Sets the value of the cell at `coordinate`.
    pub fn set_at_coordinate(
        &mut self,
        coordinate: &Point<i32>,
        value: bool,
    ) -> Result<(), VoxelError> {
        let index = self.grid.index_of_coordinate(coordinate)?;
        self.cells[index] = value;
        Ok(())
    }

    /// Is the cell containing the world-space point `point` occupied?
    pub fn get_at_point(&self, point: &Point<Real>) -> Result<bool, VoxelError> {
        let index = self.grid.index_of_point(point)?;
        Ok(self.cells[index])
    }

    /// Sets the value of the cell containing the world-space point `point`.
    pub fn set_at_point(&mut self, point: &Point<Real>, value: bool) -> Result<(), VoxelError> {
        let index = self.grid.index_of_point(point)?;
        self.cells[index] = value;
        Ok(())
    }

    /// Iterates through the linear indices of the occupied cells, in increasing order.
    pub fn iter_occupied(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, occupied)| occupied.then_some(i))
    }

    /// The linear indices of the occupied cells, in increasing order.
    pub fn occupied_indices(&self) -> Vec<usize> {
        self.iter_occupied().collect()
    }

    /// The coordinates of the occupied cells, in increasing linear index order.
    pub fn occupied_coordinates(&self) -> Vec<Point<i32>> {
        self.iter_occupied()
            .filter_map(|i| self.grid.coordinate_of_index(i).ok())
            .collect()
    }

    /// The world-space boxes of the occupied cells, in increasing linear index order.
    pub fn occupied_cell_aabbs(&self) -> Vec<Aabb> {
        self.iter_occupied()
            .filter_map(|i| self.grid.cell_aabb(i).ok())
            .collect()
    }

    /// Combines `other` into this occupancy grid with the boolean operation `op`.
    ///
    /// If `other` was built on a sub-grid (its [`Grid::offset`] is set), each of its cells is
    /// combined with the cell of `self` covering the same region; cells of `self` outside of
    /// `other` are left untouched. The translation between both grids is resolved from their
    /// lattice origins, so `other` may come from a sub-grid of any grid sharing the lattice of
    /// `self`. Otherwise, both grids are combined index by index and must have the same number
    /// of cells.
    ///
    /// Nothing is modified if an error is returned:
    /// - [`VoxelError::OutOfBounds`] if `other` is not inside of `self`,
    /// - [`VoxelError::SizeMismatch`] if `other` has more cells than `self`, or if it has no
    ///   offset and a different number of cells,
    /// - [`VoxelError::InvalidArgument`] if `other` has an offset and a different cell size.
    pub fn combine(&mut self, other: &OccupancyGrid, op: BooleanOp) -> Result<(), VoxelError> {
        if !self.grid.is_grid_inside(&other.grid) {
            return Err(VoxelError::OutOfBounds);
        }

        if other.cells.len() > self.cells.len() {
            return Err(VoxelError::SizeMismatch {
                expected: self.cells.len(),
                found: other.cells.len(),
            });
        }

        if other.grid.offset().is_none() {
            if other.cells.len() != self.cells.len() {
                return Err(VoxelError::SizeMismatch {
                    expected: self.cells.len(),
                    found: other.cells.len(),
                });
            }

            for (lhs, rhs) in self.cells.iter_mut().zip(other.cells.iter()) {
                *lhs = op.apply(*lhs, *rhs);
            }

            return Ok(());
        }

        if other.grid.cell_size() != self.grid.cell_size() {
            return Err(VoxelError::InvalidArgument(
                "cannot combine grids with different cell sizes",
            ));
        }

        let translation = other.grid.lattice_origin() - self.grid.lattice_origin();
        let counts = other.grid.cell_counts();

        // Validate the whole translated range before writing anything.
        for i in 0..DIM {
            let end = translation[i] as i64 + counts[i] as i64;
            if translation[i] < 0 || end > self.grid.cell_counts()[i] as i64 {
                return Err(VoxelError::OutOfBounds);
            }
        }

        let mut rhs = other.cells.iter();

        for z in 0..counts.z as i32 {
            for y in 0..counts.y as i32 {
                for x in 0..counts.x as i32 {
                    let index = self.grid.linearize(&(Point::new(x, y, z) + translation));
                    if let Some(value) = rhs.next() {
                        self.cells[index] = op.apply(self.cells[index], *value);
                    }
                }
            }
        }

        Ok(())
    }

    /// Keeps occupied only the cells occupied in both grids. See [`OccupancyGrid::combine`].
    pub fn and(&mut self, other: &OccupancyGrid) -> Result<(), VoxelError> {
        self.combine(other, BooleanOp::And)
    }

    /// Marks occupied the cells occupied in either grid. See [`OccupancyGrid::combine`].
    pub fn or(&mut self, other: &OccupancyGrid) -> Result<(), VoxelError> {
        self.combine(other, BooleanOp::Or)
    }

    /// Marks occupied the cells occupied in exactly one grid. See [`OccupancyGrid::combine`].
    pub fn xor(&mut self, other: &OccupancyGrid) -> Result<(), VoxelError> {
        self.combine(other, BooleanOp::Xor)
    }
}

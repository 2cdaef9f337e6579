//! Uniform grids and the boolean occupancy stored on them.

pub use self::grid::Grid;
pub use self::occupancy_grid::{BooleanOp, OccupancyGrid};

mod grid;
mod lattice;
mod occupancy_grid;

//! Rasterization of shapes into occupancy grids.
//!
//! The [`Voxelizer`] takes shapes placed in world-space, either one by one or from a
//! [`SceneQuery`], and marks the cells of an [`crate::grid::OccupancyGrid`] they intersect.

pub use self::observer::VoxelizationObserver;
pub use self::scene_query::SceneQuery;
pub use self::voxelizer::Voxelizer;
pub use self::voxelizer_options::{FillMode, VoxelizerOptions};

mod observer;
mod rasterize_heightfield;
mod scene_query;
mod voxelizer;
mod voxelizer_options;

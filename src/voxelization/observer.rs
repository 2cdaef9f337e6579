use crate::bounding_volume::Aabb;
use crate::grid::OccupancyGrid;

/// Receives the results of a scene voxelization as they are produced.
///
/// All methods do nothing by default. The observer has no influence on the occupancy
/// computed by the voxelizer.
pub trait VoxelizationObserver {
    /// Called after the `shape_index`-th shape returned by the scene was merged into the
    /// target. `local` is the occupancy computed for that shape alone, on its sub-grid.
    fn shape_rasterized(&mut self, _shape_index: usize, _local: &OccupancyGrid) {}

    /// Called once per occupied cell of the target, in increasing index order, after all the
    /// shapes have been merged.
    fn cell_occupied(&mut self, _index: usize, _cell_aabb: &Aabb) {}
}

impl VoxelizationObserver for () {}

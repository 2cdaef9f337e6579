use crate::bounding_volume::Aabb;
use crate::grid::{Grid, OccupancyGrid};
use crate::math::{Isometry, Point, Real, Vector};
use crate::query::AabbIntersection;
use crate::shape::{OrientedBox, SceneShape, ShapeInstance};
use crate::voxelization::rasterize_heightfield::rasterize_heightfield;
use crate::voxelization::{FillMode, SceneQuery, VoxelizationObserver, VoxelizerOptions};
use crate::VoxelError;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Rasterizes shapes into occupancy grids.
///
/// Every shape is rasterized on its own sub-grid of the target, covering the shape bounds,
/// and the result is merged into the target with [`crate::grid::BooleanOp::Or`]: a cell is
/// occupied if any shape occupies it. A shape is never partially merged: if its rasterization
/// fails, the target is left untouched.
///
/// # Example
///
/// ```
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use voxelate3d::bounding_volume::Aabb;
/// use voxelate3d::grid::{Grid, OccupancyGrid};
/// use voxelate3d::math::{Isometry, Point, Vector};
/// use voxelate3d::shape::{Ball, ShapeInstance};
/// use voxelate3d::voxelization::Voxelizer;
///
/// let bounds = Aabb::new(Point::origin(), Point::new(2.0, 2.0, 2.0));
/// let mut target = OccupancyGrid::new(Grid::new(Vector::repeat(1.0), &bounds).unwrap());
/// let ball = ShapeInstance::new(Ball::new(0.4), Isometry::translation(0.5, 0.5, 0.5));
///
/// Voxelizer::new().rasterize(&mut target, &ball).unwrap();
/// assert_eq!(target.occupied_indices(), vec![0]);
/// # }
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Voxelizer {
    options: VoxelizerOptions,
}

impl Voxelizer {
    /// A voxelizer with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// A voxelizer with the given options.
    pub fn with_options(options: VoxelizerOptions) -> Self {
        Self { options }
    }

    /// The options of this voxelizer.
    pub fn options(&self) -> &VoxelizerOptions {
        &self.options
    }

    fn check_num_cells(&self, grid: &Grid) -> Result<(), VoxelError> {
        if grid.num_cells() > self.options.max_cells {
            return Err(VoxelError::InvalidArgument(
                "the grid has more cells than allowed by the voxelizer options",
            ));
        }

        Ok(())
    }

    /// Rasterizes `instance` on a sub-grid of `target_grid` without merging it anywhere.
    ///
    /// Returns `Ok(None)` if [`VoxelizerOptions::clip_to_target`] is set and the shape does not
    /// overlap the target. Fails with [`VoxelError::OutOfBounds`] if clipping is disabled and
    /// the shape bounds stick out of the target grid.
    pub fn rasterize_local(
        &self,
        target_grid: &Grid,
        instance: &ShapeInstance,
    ) -> Result<Option<OccupancyGrid>, VoxelError> {
        let mut bounds = instance.aabb();

        if self.options.clip_to_target {
            match bounds.intersection(target_grid.bounds()) {
                Some(clipped) => bounds = clipped,
                None => {
                    log::trace!(
                        "skipping {:?}: it does not overlap the target",
                        instance.shape.shape_type()
                    );
                    return Ok(None);
                }
            }
        }

        self.rasterize_in_bounds(target_grid, instance, &bounds)
            .map(Some)
    }

    fn rasterize_in_bounds(
        &self,
        target_grid: &Grid,
        instance: &ShapeInstance,
        bounds: &Aabb,
    ) -> Result<OccupancyGrid, VoxelError> {
        let sub_grid = target_grid.sub_grid(bounds)?;
        self.check_num_cells(&sub_grid)?;

        let mut local = OccupancyGrid::new(sub_grid);
        self.rasterize_shape(&mut local, &instance.shape, &instance.position);

        log::debug!(
            "rasterized {:?} on {} local cells, {} occupied",
            instance.shape.shape_type(),
            local.grid().num_cells(),
            local.num_occupied()
        );

        Ok(local)
    }

    fn rasterize_shape(
        &self,
        local: &mut OccupancyGrid,
        shape: &SceneShape,
        pos: &Isometry<Real>,
    ) {
        match shape {
            SceneShape::Cuboid(cuboid) => {
                rasterize_cells(local, &OrientedBox::from_cuboid(cuboid, pos));
            }
            SceneShape::Ball(ball) => {
                rasterize_cells(local, &ball.bounding_sphere(pos));
            }
            SceneShape::Capsule(capsule) => {
                rasterize_cells(local, &capsule.transform_by(pos));
            }
            SceneShape::ConvexMesh(mesh) => {
                let triangles = mesh.triangles(pos, None);
                let solid = self.options.fill_mode == FillMode::FloodFill;

                rasterize_cells_with(local, |cell| {
                    if triangles.iter().any(|tri| tri.intersects_aabb(cell)) {
                        return true;
                    }

                    solid && mesh.contains_point(&pos.inverse_transform_point(&cell.center()))
                });
            }
            SceneShape::HeightField(heightfield) => {
                let num_columns = rasterize_heightfield(
                    local,
                    heightfield,
                    pos,
                    self.options.height_sampling,
                    self.options.fill_mode,
                );

                if num_columns == 0 {
                    log::warn!(
                        "no column of the local grid {:?} could sample the height-field surface",
                        local.grid().bounds()
                    );
                }
            }
            SceneShape::Compound(compound) => {
                for (delta, part) in compound.shapes() {
                    self.rasterize_shape(local, part, &(pos * delta));
                }
            }
        }
    }

    /// Rasterizes `instance` and merges the result into `target`.
    ///
    /// See [`Voxelizer::rasterize_local`] for the failure cases.
    pub fn rasterize(
        &self,
        target: &mut OccupancyGrid,
        instance: &ShapeInstance,
    ) -> Result<(), VoxelError> {
        if let Some(local) = self.rasterize_local(target.grid(), instance)? {
            target.or(&local)?;
        }

        Ok(())
    }

    /// Rasterizes all the `instances` and merges them into `target`.
    ///
    /// The shapes are rasterized independently, in parallel if the `parallel` feature is
    /// enabled, then merged in order. Nothing is merged if any shape fails.
    pub fn rasterize_all(
        &self,
        target: &mut OccupancyGrid,
        instances: &[ShapeInstance],
    ) -> Result<(), VoxelError> {
        let grid = *target.grid();

        #[cfg(feature = "parallel")]
        let locals = instances
            .par_iter()
            .map(|instance| self.rasterize_local(&grid, instance))
            .collect::<Result<Vec<_>, _>>()?;
        #[cfg(not(feature = "parallel"))]
        let locals = instances
            .iter()
            .map(|instance| self.rasterize_local(&grid, instance))
            .collect::<Result<Vec<_>, _>>()?;

        for local in locals.iter().flatten() {
            target.or(local)?;
        }

        Ok(())
    }

    /// Rasterizes into `target` every shape of `scene` overlapping it.
    ///
    /// Shapes are clipped to the bounds of `target`, whatever
    /// [`VoxelizerOptions::clip_to_target`] says. Shapes are merged one at a time: if one of
    /// them fails, the shapes merged before it stay merged.
    pub fn voxelize_scene<Scene, Observer>(
        &self,
        target: &mut OccupancyGrid,
        scene: &Scene,
        observer: &mut Observer,
    ) -> Result<(), VoxelError>
    where
        Scene: SceneQuery + ?Sized,
        Observer: VoxelizationObserver + ?Sized,
    {
        let target_bounds = *target.grid().bounds();
        let instances = scene.shapes_intersecting_aabb(&target_bounds);

        for (shape_index, instance) in instances.iter().enumerate() {
            let Some(bounds) = instance.aabb().intersection(&target_bounds) else {
                log::trace!(
                    "skipping {:?}: it does not overlap the target",
                    instance.shape.shape_type()
                );
                continue;
            };

            let local = self.rasterize_in_bounds(target.grid(), instance, &bounds)?;
            target.or(&local)?;
            observer.shape_rasterized(shape_index, &local);
        }

        let grid = target.grid();
        for index in target.iter_occupied() {
            if let Ok(cell_aabb) = grid.cell_aabb(index) {
                observer.cell_occupied(index, &cell_aabb);
            }
        }

        log::debug!(
            "voxelized {} shapes, {} occupied cells",
            instances.len(),
            target.num_occupied()
        );

        Ok(())
    }

    /// Builds the grid with cells of size `cell_size` covering `bounds`, and voxelizes `scene`
    /// into it.
    pub fn voxelize<Scene>(
        &self,
        cell_size: Vector<Real>,
        bounds: &Aabb,
        scene: &Scene,
    ) -> Result<OccupancyGrid, VoxelError>
    where
        Scene: SceneQuery + ?Sized,
    {
        let grid = Grid::new(cell_size, bounds)?;
        self.check_num_cells(&grid)?;

        let mut target = OccupancyGrid::new(grid);
        self.voxelize_scene(&mut target, scene, &mut ())?;
        Ok(target)
    }
}

/// Marks the cells of `local` intersecting `shape`.
fn rasterize_cells(local: &mut OccupancyGrid, shape: &impl AabbIntersection) {
    rasterize_cells_with(local, |cell| shape.intersects_aabb(cell))
}

/// Marks the cells of `local` for which `intersects` returns `true`.
///
/// Cells that are already occupied are not tested again.
fn rasterize_cells_with(local: &mut OccupancyGrid, intersects: impl Fn(&Aabb) -> bool) {
    let grid = *local.grid();
    let counts = grid.cell_counts().cast::<i32>();
    let cells = local.cells_mut();
    let mut index = 0;

    for z in 0..counts.z {
        for y in 0..counts.y {
            for x in 0..counts.x {
                if !cells[index] && intersects(&grid.cell_aabb_unchecked(&Point::new(x, y, z))) {
                    cells[index] = true;
                }

                index += 1;
            }
        }
    }
}

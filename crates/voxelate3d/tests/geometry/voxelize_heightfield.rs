use na::DMatrix;
use voxelate3d::bounding_volume::Aabb;
use voxelate3d::grid::{Grid, OccupancyGrid};
use voxelate3d::math::{Isometry, Point, Real, Vector, Vector2};
use voxelate3d::shape::{HeightField, HeightSampling, ShapeInstance};
use voxelate3d::voxelization::{FillMode, Voxelizer, VoxelizerOptions};

fn voxelizer(fill_mode: FillMode, height_sampling: HeightSampling) -> Voxelizer {
    Voxelizer::with_options(VoxelizerOptions {
        fill_mode,
        height_sampling,
        ..VoxelizerOptions::default()
    })
}

fn target(cell_size: Vector<Real>, maxs: [Real; 3]) -> OccupancyGrid {
    let bounds = Aabb::new(Point::origin(), Point::from(maxs));
    OccupancyGrid::new(Grid::new(cell_size, &bounds).unwrap())
}

/// A slope rising by one unit per unit along `x`, from `0` to `4`.
fn slope() -> ShapeInstance {
    let heights = DMatrix::from_fn(2, 5, |_, j| j as Real);
    let heightfield = HeightField::new(heights, Vector2::repeat(1.0)).unwrap();
    ShapeInstance::new(heightfield, Isometry::identity())
}

fn occupied_heights_per_column(occupancy: &OccupancyGrid) -> Vec<Vec<i32>> {
    let mut columns = vec![Vec::new(); occupancy.grid().cell_counts().x as usize];
    for coordinate in occupancy.occupied_coordinates() {
        columns[coordinate.x as usize].push(coordinate.z);
    }
    columns
}

#[test]
fn slope_surface() {
    let mut target = target(Vector::repeat(1.0), [4.0, 1.0, 4.0]);
    voxelizer(FillMode::SurfaceOnly, HeightSampling::Nearest)
        .rasterize(&mut target, &slope())
        .unwrap();

    assert_eq!(
        occupied_heights_per_column(&target),
        vec![vec![0, 1], vec![0, 1, 2], vec![1, 2, 3], vec![2, 3]]
    );
}

#[test]
fn slope_flood_fill() {
    let mut target = target(Vector::repeat(1.0), [4.0, 1.0, 4.0]);
    voxelizer(FillMode::FloodFill, HeightSampling::Nearest)
        .rasterize(&mut target, &slope())
        .unwrap();

    assert_eq!(
        occupied_heights_per_column(&target),
        vec![vec![0, 1], vec![0, 1, 2], vec![0, 1, 2, 3], vec![0, 1, 2, 3]]
    );
}

#[test]
fn nearest_and_bilinear_sampling_differ() {
    let heights = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 0.0, 1.0]);
    let heightfield = HeightField::new(heights, Vector2::new(2.0, 1.0)).unwrap();
    let instance = ShapeInstance::new(heightfield, Isometry::identity());
    let cell_size = Vector::new(1.0, 1.0, 0.25);

    let mut nearest = target(cell_size, [2.0, 1.0, 1.0]);
    voxelizer(FillMode::SurfaceOnly, HeightSampling::Nearest)
        .rasterize(&mut nearest, &instance)
        .unwrap();
    assert_eq!(
        occupied_heights_per_column(&nearest),
        vec![vec![0, 1, 2, 3], vec![3]]
    );

    let mut bilinear = target(cell_size, [2.0, 1.0, 1.0]);
    voxelizer(FillMode::SurfaceOnly, HeightSampling::Bilinear)
        .rasterize(&mut bilinear, &instance)
        .unwrap();
    assert_eq!(
        occupied_heights_per_column(&bilinear),
        vec![vec![0, 1, 2], vec![1, 2, 3]]
    );
}

#[test]
fn translated_flat_terrain() {
    let heightfield = HeightField::new(DMatrix::repeat(3, 3, 0.5), Vector2::repeat(1.0)).unwrap();
    let instance = ShapeInstance::new(heightfield, Isometry::translation(1.0, 0.0, 1.0));
    let mut target = target(Vector::repeat(1.0), [4.0, 2.0, 4.0]);

    voxelizer(FillMode::FloodFill, HeightSampling::Bilinear)
        .rasterize(&mut target, &instance)
        .unwrap();

    assert_eq!(
        target.occupied_coordinates(),
        vec![
            Point::new(1, 0, 1),
            Point::new(2, 0, 1),
            Point::new(1, 1, 1),
            Point::new(2, 1, 1),
        ]
    );
}

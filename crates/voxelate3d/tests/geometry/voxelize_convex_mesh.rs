use voxelate3d::bounding_volume::Aabb;
use voxelate3d::grid::{Grid, OccupancyGrid};
use voxelate3d::math::{Isometry, Point, Real, Vector};
use voxelate3d::shape::{ConvexMesh, ShapeInstance};
use voxelate3d::voxelization::{FillMode, Voxelizer, VoxelizerOptions};

/// The hull of the box `[-1.5, 1.5]^3`, with a mix of clockwise and counter-clockwise faces.
fn box_hull() -> ConvexMesh {
    let h: Real = 1.5;
    let vertices = vec![
        Point::new(-h, -h, -h),
        Point::new(h, -h, -h),
        Point::new(h, h, -h),
        Point::new(-h, h, -h),
        Point::new(-h, -h, h),
        Point::new(h, -h, h),
        Point::new(h, h, h),
        Point::new(-h, h, h),
    ];
    let indices = vec![
        [0, 1, 2],
        [0, 2, 3],
        [4, 5, 6],
        [4, 6, 7],
        [0, 1, 5],
        [0, 5, 4],
        [3, 2, 6],
        [3, 6, 7],
        [0, 3, 7],
        [0, 7, 4],
        [1, 2, 6],
        [1, 6, 5],
    ];

    ConvexMesh::new(vertices, indices).unwrap()
}

fn voxelize(fill_mode: FillMode) -> OccupancyGrid {
    let bounds = Aabb::new(Point::origin(), Point::new(4.0, 4.0, 4.0));
    let mut target = OccupancyGrid::new(Grid::new(Vector::repeat(1.0), &bounds).unwrap());
    let instance = ShapeInstance::new(box_hull(), Isometry::translation(2.0, 2.0, 2.0));

    Voxelizer::with_options(VoxelizerOptions {
        fill_mode,
        ..VoxelizerOptions::default()
    })
    .rasterize(&mut target, &instance)
    .unwrap();

    target
}

fn is_on_the_boundary(coordinate: &Point<i32>) -> bool {
    coordinate.iter().any(|c| *c == 0 || *c == 3)
}

#[test]
fn hollow_hull() {
    let target = voxelize(FillMode::SurfaceOnly);

    assert_eq!(target.num_occupied(), 56);
    assert!(target.occupied_coordinates().iter().all(is_on_the_boundary));
}

#[test]
fn solid_hull() {
    let target = voxelize(FillMode::FloodFill);

    assert_eq!(target.num_occupied(), 64);
    assert_eq!(target.get_at_point(&Point::new(2.0, 2.0, 2.0)), Ok(true));
}

#[test]
fn flood_fill_only_adds_cells() {
    let surface = voxelize(FillMode::SurfaceOnly);
    let solid = voxelize(FillMode::FloodFill);

    for index in surface.iter_occupied() {
        assert_eq!(solid.get(index), Ok(true));
    }
}

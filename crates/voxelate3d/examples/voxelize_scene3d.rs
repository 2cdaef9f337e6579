extern crate nalgebra as na;

use na::{DMatrix, Isometry3, Point3, Vector2, Vector3};
use voxelate3d::bounding_volume::Aabb;
use voxelate3d::shape::{Ball, Capsule, Cuboid, HeightField, ShapeInstance};
use voxelate3d::voxelization::{FillMode, Voxelizer, VoxelizerOptions};

fn main() {
    /*
     * Build the scene: some rolling terrain with a few props on top of it.
     */
    let heights = DMatrix::from_fn(9, 9, |i, j| {
        let (x, y) = (j as f32 * 0.5, i as f32 * 0.5);
        1.0 + 0.5 * (x.sin() + y.cos())
    });
    let terrain = HeightField::new(heights, Vector2::repeat(1.0)).unwrap();

    let scene = vec![
        ShapeInstance::new(terrain, Isometry3::identity()),
        ShapeInstance::new(Ball::new(0.75), Isometry3::translation(2.0, 2.0, 3.0)),
        ShapeInstance::new(
            Cuboid::new(Vector3::new(1.0, 0.5, 0.5)),
            Isometry3::new(Vector3::new(5.5, 2.5, 3.0), Vector3::z() * 0.6),
        ),
        ShapeInstance::new(
            Capsule::new_z(1.0, 0.3),
            Isometry3::translation(4.0, 6.0, 3.5),
        ),
    ];

    /*
     * Voxelize it with cells of half a unit.
     */
    let bounds = Aabb::new(Point3::origin(), Point3::new(8.0, 8.0, 6.0));
    let voxelizer = Voxelizer::with_options(VoxelizerOptions {
        fill_mode: FillMode::FloodFill,
        ..VoxelizerOptions::default()
    });
    let occupancy = voxelizer
        .voxelize(Vector3::repeat(0.5), &bounds, &scene)
        .unwrap();

    let counts = occupancy.grid().cell_counts();
    println!(
        "{} of the {}x{}x{} cells are occupied.",
        occupancy.num_occupied(),
        counts.x,
        counts.y,
        counts.z
    );

    /*
     * Print the highest occupied cell of every column as a height map.
     */
    for y in (0..counts.y as i32).rev() {
        let row: String = (0..counts.x as i32)
            .map(|x| {
                let top = (0..counts.z as i32)
                    .rev()
                    .find(|z| occupancy.get_at_coordinate(&Point3::new(x, y, *z)) == Ok(true));
                match top {
                    Some(z) => std::char::from_digit(z as u32 % 36, 36).unwrap_or('#'),
                    None => '.',
                }
            })
            .collect();
        println!("{row}");
    }
}

use voxelate3d::bounding_volume::{Aabb, BoundingVolume};
use voxelate3d::grid::{Grid, OccupancyGrid};
use voxelate3d::math::{Isometry, Point, Vector};
use voxelate3d::shape::{Ball, Capsule, Compound, Cuboid, SceneShape, ShapeInstance};
use voxelate3d::voxelization::{SceneQuery, VoxelizationObserver, Voxelizer};

#[derive(Default)]
struct Recorder {
    shapes: Vec<(usize, usize)>,
    cells: Vec<usize>,
}

impl VoxelizationObserver for Recorder {
    fn shape_rasterized(&mut self, shape_index: usize, local: &OccupancyGrid) {
        self.shapes.push((shape_index, local.num_occupied()));
    }

    fn cell_occupied(&mut self, index: usize, cell_aabb: &Aabb) {
        assert_eq!(cell_aabb.extents(), Vector::repeat(1.0));
        self.cells.push(index);
    }
}

/// A scene that only knows about its shapes through their bounding boxes.
struct BoxedScene {
    instances: Vec<ShapeInstance>,
}

impl SceneQuery for BoxedScene {
    fn shapes_intersecting_aabb(&self, aabb: &Aabb) -> Vec<ShapeInstance> {
        self.instances
            .iter()
            .filter(|instance| instance.aabb().intersects(aabb))
            .cloned()
            .collect()
    }
}

fn target() -> OccupancyGrid {
    let bounds = Aabb::new(Point::origin(), Point::new(4.0, 4.0, 4.0));
    OccupancyGrid::new(Grid::new(Vector::repeat(1.0), &bounds).unwrap())
}

#[test]
fn observer_sees_every_shape_and_cell() {
    let scene = BoxedScene {
        instances: vec![
            ShapeInstance::new(Ball::new(0.4), Isometry::translation(0.5, 0.5, 0.5)),
            ShapeInstance::new(Ball::new(0.4), Isometry::translation(20.0, 0.5, 0.5)),
            ShapeInstance::new(
                Cuboid::new(Vector::new(0.4, 0.4, 0.9)),
                Isometry::translation(2.5, 2.5, 1.0),
            ),
        ],
    };

    let mut target = target();
    let mut recorder = Recorder::default();
    Voxelizer::new()
        .voxelize_scene(&mut target, &scene, &mut recorder)
        .unwrap();

    // The far away ball is never returned by the scene.
    assert_eq!(recorder.shapes, vec![(0, 1), (1, 2)]);
    assert_eq!(recorder.cells, target.occupied_indices());
    assert_eq!(
        target.occupied_coordinates(),
        vec![Point::new(0, 0, 0), Point::new(2, 2, 0), Point::new(2, 2, 1)]
    );
}

#[test]
fn scene_shapes_are_clipped_to_the_target() {
    let scene = vec![ShapeInstance::new(Ball::new(1.5), Isometry::identity())];
    let bounds = Aabb::new(Point::origin(), Point::new(4.0, 4.0, 4.0));

    let occupancy = Voxelizer::new()
        .voxelize(Vector::repeat(1.0), &bounds, &scene)
        .unwrap();

    // The corner cell (1, 1, 1) is farther than the radius from the center.
    assert_eq!(
        occupancy.occupied_coordinates(),
        vec![
            Point::new(0, 0, 0),
            Point::new(1, 0, 0),
            Point::new(0, 1, 0),
            Point::new(1, 1, 0),
            Point::new(0, 0, 1),
            Point::new(1, 0, 1),
            Point::new(0, 1, 1),
        ]
    );
}

#[test]
fn overlapping_shapes_are_merged() {
    let scene = vec![
        ShapeInstance::new(Ball::new(0.4), Isometry::translation(1.5, 1.5, 1.5)),
        ShapeInstance::new(
            Cuboid::new(Vector::repeat(0.45)),
            Isometry::translation(1.5, 1.5, 1.5),
        ),
    ];
    let bounds = Aabb::new(Point::origin(), Point::new(4.0, 4.0, 4.0));

    let occupancy = Voxelizer::new()
        .voxelize(Vector::repeat(1.0), &bounds, &scene)
        .unwrap();

    assert_eq!(occupancy.occupied_coordinates(), vec![Point::new(1, 1, 1)]);
}

#[test]
fn compound_parts_share_one_local_grid() {
    let dumbbell = Compound::new(vec![
        (Isometry::translation(-1.0, 0.0, 0.0), SceneShape::from(Ball::new(0.4))),
        (Isometry::translation(1.0, 0.0, 0.0), SceneShape::from(Ball::new(0.4))),
        (Isometry::identity(), SceneShape::from(Capsule::new_x(1.0, 0.1))),
    ])
    .unwrap();

    let mut target = target();
    let mut recorder = Recorder::default();
    let scene = vec![ShapeInstance::new(dumbbell, Isometry::translation(1.5, 0.5, 0.5))];
    Voxelizer::new()
        .voxelize_scene(&mut target, &scene, &mut recorder)
        .unwrap();

    assert_eq!(recorder.shapes, vec![(0, 3)]);
    assert_eq!(
        target.occupied_coordinates(),
        vec![Point::new(0, 0, 0), Point::new(1, 0, 0), Point::new(2, 0, 0)]
    );
}

#[test]
fn scaled_instances() {
    let scene = vec![ShapeInstance::scaled(
        Cuboid::new(Vector::repeat(0.5)),
        Isometry::translation(2.0, 0.5, 0.5),
        &Vector::new(-4.0, 1.0, 1.0),
    )];
    let bounds = Aabb::new(Point::origin(), Point::new(4.0, 4.0, 4.0));

    let occupancy = Voxelizer::new()
        .voxelize(Vector::repeat(1.0), &bounds, &scene)
        .unwrap();

    assert_eq!(occupancy.num_occupied(), 4);
    assert!(occupancy.occupied_coordinates().iter().all(|c| c.y == 0 && c.z == 0));
}

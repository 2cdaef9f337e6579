use oorandom::Rand32;
use voxelate3d::bounding_volume::{Aabb, BoundingSphere};
use voxelate3d::math::{Point, Real, Rotation, Vector, DEFAULT_EPSILON};
use voxelate3d::query::sat::aabb_triangle_separating_axis;
use voxelate3d::query::{intersection_test_aabb_obb, intersection_test_obb_obb, AabbIntersection};
use voxelate3d::shape::{Capsule, OrientedBox, Triangle};

fn unit_cell() -> Aabb {
    Aabb::new(Point::origin(), Point::new(1.0, 1.0, 1.0))
}

fn random_obb(rng: &mut Rand32) -> OrientedBox {
    let mut real = |scale: Real| rng.rand_float() as Real * scale;
    let center = Point::new(real(4.0) - 2.0, real(4.0) - 2.0, real(4.0) - 2.0);
    let half_extents = Vector::new(real(1.5) + 0.1, real(1.5) + 0.1, real(1.5) + 0.1);
    let rotation = Rotation::from_euler_angles(real(6.0), real(6.0), real(6.0));
    OrientedBox::new(center, half_extents, rotation)
}

#[test]
fn obb_test_does_not_depend_on_the_argument_order() {
    let mut rng = Rand32::new(1234);

    for _ in 0..1000 {
        let a = random_obb(&mut rng);
        let b = random_obb(&mut rng);
        assert_eq!(intersection_test_obb_obb(&a, &b), intersection_test_obb_obb(&b, &a));
    }
}

#[test]
fn obb_face_contact_is_a_separation() {
    let a = OrientedBox::new(Point::origin(), Vector::repeat(0.5), Rotation::identity());
    let touching = OrientedBox::new(
        Point::new(1.0, 0.0, 0.0),
        Vector::repeat(0.5),
        Rotation::identity(),
    );
    let overlapping = OrientedBox::new(
        Point::new(0.99, 0.0, 0.0),
        Vector::repeat(0.5),
        Rotation::identity(),
    );

    assert!(!intersection_test_obb_obb(&a, &touching));
    assert!(intersection_test_obb_obb(&a, &overlapping));
    assert!(intersection_test_obb_obb(&a, &a));
}

#[test]
fn flat_obb_on_a_cell_face() {
    // No thickness along z, lying on the z = 1 plane.
    let flat = OrientedBox::new(
        Point::new(1.0, 0.5, 1.0),
        Vector::new(1.0, 0.5, 0.0),
        Rotation::identity(),
    );
    let cell = |x: Real, z: Real| {
        Aabb::new(Point::new(x, 0.0, z), Point::new(x + 1.0, 1.0, z + 1.0))
    };

    assert!(intersection_test_aabb_obb(&cell(0.0, 1.0), &flat));
    assert!(intersection_test_aabb_obb(&cell(1.0, 1.0), &flat));
    assert!(intersection_test_aabb_obb(&cell(0.0, 0.0), &flat));
    assert!(!intersection_test_aabb_obb(&cell(0.0, 2.0), &flat));
    // Only the flat axis counts contact as a hit.
    assert!(!intersection_test_aabb_obb(&cell(2.0, 1.0), &flat));
}

#[test]
fn almost_parallel_boxes() {
    let tilted = |x: Real, angle: Real| {
        OrientedBox::new(
            Point::new(x, 0.0, 0.0),
            Vector::repeat(0.5),
            Rotation::from_axis_angle(&Vector::z_axis(), angle),
        )
    };
    let a = tilted(0.0, 1.0e-6);

    assert!(intersection_test_obb_obb(&a, &tilted(0.99, 3.0e-6)));
    assert!(intersection_test_obb_obb(&tilted(0.99, 3.0e-6), &a));
    assert!(!intersection_test_obb_obb(&a, &tilted(1.01, 3.0e-6)));
    assert!(!intersection_test_obb_obb(&tilted(1.01, 3.0e-6), &a));
}

#[test]
fn rotated_box_against_grid_cells() {
    // A thin slab along the diagonal of the xy plane.
    let slab = OrientedBox::new(
        Point::new(1.0, 1.0, 0.5),
        Vector::new(1.5, 0.1, 0.4),
        Rotation::from_axis_angle(&Vector::z_axis(), std::f64::consts::FRAC_PI_4 as Real),
    );

    let on_diagonal = Aabb::new(Point::new(1.0, 1.0, 0.0), Point::new(2.0, 2.0, 1.0));
    let off_diagonal = Aabb::new(Point::new(1.5, -0.5, 0.0), Point::new(2.5, 0.4, 1.0));

    assert!(intersection_test_aabb_obb(&on_diagonal, &slab));
    assert!(on_diagonal.intersects_shape(&slab));
    // The AABB of the slab overlaps this cell, the slab itself does not.
    assert!(slab.aabb().intersection(&off_diagonal).is_some());
    assert!(!intersection_test_aabb_obb(&off_diagonal, &slab));
}

#[test]
fn sphere_reaches_the_cell_corners() {
    let cell = unit_cell();
    let radius = 0.5;
    let eps = DEFAULT_EPSILON * 100.0;

    for corner in cell.vertices() {
        let dir = (corner - cell.center()).normalize();
        let touching = BoundingSphere::new(corner + dir * (radius - eps), radius);
        let apart = BoundingSphere::new(corner + dir * (radius + eps), radius);

        assert!(touching.intersects_aabb(&cell));
        assert!(!apart.intersects_aabb(&cell));
    }

    let inside = BoundingSphere::new(cell.center(), 0.01);
    assert!(inside.intersects_aabb(&cell));
}

#[test]
fn capsule_against_cells() {
    let capsule = Capsule::new(Point::new(-1.0, 0.5, 0.5), Point::new(3.0, 0.5, 0.5), 0.2);

    assert!(capsule.intersects_aabb(&unit_cell()));
    assert!(capsule.intersects_aabb(&unit_cell().translated(&Vector::new(2.0, 0.0, 0.0))));
    assert!(!capsule.intersects_aabb(&unit_cell().translated(&Vector::new(0.0, 1.0, 0.0))));
    // Beyond the end caps.
    assert!(!capsule.intersects_aabb(&unit_cell().translated(&Vector::new(-2.5, 0.0, 0.0))));
    assert!(capsule.intersects_aabb(&unit_cell().translated(&Vector::new(-2.1, 0.0, 0.0))));
}

#[test]
fn triangle_separated_by_an_edge_axis_only() {
    let cell = Aabb::new(Point::new(-1.0, -1.0, -1.0), Point::new(1.0, 1.0, 1.0));
    let triangle = Triangle::new(
        Point::new(-1.5, -2.5, -0.5),
        Point::new(1.0, -1.5, -3.0),
        Point::new(1.0, 0.5, -2.5),
    );

    // Neither the box faces nor the triangle plane separate them.
    let triangle_aabb = triangle.aabb();
    assert!(triangle_aabb.intersection(&cell).is_some());

    let axis = aabb_triangle_separating_axis(&cell, &triangle).unwrap();
    assert!(axis.iter().filter(|c| c.abs() > 1.0e-3).count() >= 2);
    assert!(axis.cross(&triangle.scaled_normal()).norm() > 1.0e-3);
    assert!(!triangle.intersects_aabb(&cell));

    let shifted = triangle.translated(&Vector::new(0.0, 0.5, 0.5));
    assert!(shifted.intersects_aabb(&cell));
}

#[test]
fn triangle_touching_a_cell_intersects_it() {
    let cell = unit_cell();
    let touching = Triangle::new(
        Point::new(1.0, 0.5, 0.5),
        Point::new(2.0, 0.0, 0.5),
        Point::new(2.0, 1.0, 0.5),
    );
    let apart = touching.translated(&Vector::new(0.01, 0.0, 0.0));

    assert!(touching.intersects_aabb(&cell));
    assert!(!apart.intersects_aabb(&cell));
}

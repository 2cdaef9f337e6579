use oorandom::Rand32;
use voxelate3d::bounding_volume::Aabb;
use voxelate3d::grid::{BooleanOp, Grid, OccupancyGrid};
use voxelate3d::math::{Point, Vector};
use voxelate3d::VoxelError;

fn global_grid() -> Grid {
    let bounds = Aabb::new(Point::origin(), Point::new(2.0, 2.0, 2.0));
    Grid::new(Vector::repeat(1.0), &bounds).unwrap()
}

fn random_occupancy(grid: Grid, rng: &mut Rand32) -> OccupancyGrid {
    let cells = (0..grid.num_cells()).map(|_| rng.rand_u32() % 2 == 0).collect();
    OccupancyGrid::from_cells(grid, cells).unwrap()
}

#[test]
fn sub_grid_cells_land_at_their_offset() {
    let global = global_grid();
    let sub_grid = global
        .sub_grid(&Aabb::new(Point::new(1.0, 0.0, 0.0), Point::new(2.0, 2.0, 2.0)))
        .unwrap();
    assert_eq!(sub_grid.offset(), Some(&Vector::new(1, 0, 0)));

    let mut local = OccupancyGrid::new(sub_grid);
    local.set_at_coordinate(&Point::new(0, 0, 0), true).unwrap();

    let mut target = OccupancyGrid::new(global);
    target.combine(&local, BooleanOp::Or).unwrap();

    assert_eq!(target.occupied_coordinates(), vec![Point::new(1, 0, 0)]);
    assert_eq!(target.get_at_coordinate(&Point::new(0, 0, 0)), Ok(false));
}

#[test]
fn combining_with_itself() {
    let mut rng = Rand32::new(3);
    let bounds = Aabb::new(Point::new(-2.0, -1.0, 0.0), Point::new(3.0, 2.0, 4.0));
    let grid = Grid::new(Vector::new(0.5, 1.0, 0.25), &bounds).unwrap();

    for _ in 0..20 {
        let a = random_occupancy(grid, &mut rng);

        let mut or = a.clone();
        or.or(&a).unwrap();
        assert_eq!(or, a);

        let mut and = a.clone();
        and.and(&a).unwrap();
        assert_eq!(and, a);

        let mut xor = a.clone();
        xor.xor(&a).unwrap();
        assert!(xor.is_empty());
    }
}

#[test]
fn boolean_operations_on_a_sub_region() {
    let global = global_grid();
    let sub_grid = global
        .sub_grid(&Aabb::new(Point::new(0.0, 1.0, 0.0), Point::new(2.0, 2.0, 1.0)))
        .unwrap();
    assert_eq!(sub_grid.cell_counts(), &Vector::new(2, 1, 1));

    let mut local = OccupancyGrid::new(sub_grid);
    local.set_at_coordinate(&Point::new(1, 0, 0), true).unwrap();

    let mut target = OccupancyGrid::new(global);
    target.fill(true);

    // Cells outside of the sub-grid are not affected.
    target.combine(&local, BooleanOp::And).unwrap();
    assert_eq!(target.num_occupied(), 7);
    assert_eq!(target.get_at_coordinate(&Point::new(0, 1, 0)), Ok(false));

    target.combine(&local, BooleanOp::Xor).unwrap();
    assert_eq!(target.num_occupied(), 6);
    assert_eq!(target.get_at_coordinate(&Point::new(1, 1, 0)), Ok(false));
}

#[test]
fn incompatible_grids_leave_the_target_untouched() {
    let mut rng = Rand32::new(5);
    let global = global_grid();
    let mut target = random_occupancy(global, &mut rng);
    let before = target.clone();

    let larger = Grid::new(
        Vector::repeat(1.0),
        &Aabb::new(Point::origin(), Point::new(3.0, 2.0, 2.0)),
    )
    .unwrap();
    assert_eq!(
        target.or(&OccupancyGrid::new(larger)),
        Err(VoxelError::OutOfBounds)
    );

    let smaller = Grid::new(
        Vector::repeat(1.0),
        &Aabb::new(Point::origin(), Point::new(1.0, 2.0, 2.0)),
    )
    .unwrap();
    assert_eq!(
        target.or(&OccupancyGrid::new(smaller)),
        Err(VoxelError::SizeMismatch {
            expected: 8,
            found: 4
        })
    );

    assert_eq!(target, before);
}

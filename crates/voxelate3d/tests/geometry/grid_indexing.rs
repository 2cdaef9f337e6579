use oorandom::Rand32;
use voxelate3d::bounding_volume::{Aabb, BoundingVolume};
use voxelate3d::grid::Grid;
use voxelate3d::math::{Point, Real, Vector};
use voxelate3d::VoxelError;

const CELL_SIZES: [Real; 4] = [0.25, 0.5, 1.0, 2.0];

fn random_grid(rng: &mut Rand32) -> (Aabb, Grid) {
    let cell_size = Vector::from_fn(|_, _| CELL_SIZES[rng.rand_range(0..4) as usize]);
    let mins = Point::from(Vector::from_fn(|_, _| rng.rand_float() as Real * 20.0 - 10.0));
    let extents = Vector::from_fn(|_, _| rng.rand_float() as Real * 5.0);
    let bounds = Aabb::new(mins, mins + extents);

    (bounds, Grid::new(cell_size, &bounds).unwrap())
}

#[test]
fn unit_grid_layout() {
    let bounds = Aabb::new(Point::origin(), Point::new(2.0, 2.0, 2.0));
    let grid = Grid::new(Vector::repeat(1.0), &bounds).unwrap();

    assert_eq!(grid.cell_counts(), &Vector::new(2, 2, 2));
    assert_eq!(grid.num_cells(), 8);
    assert_eq!(grid.index_of_coordinate(&Point::new(1, 1, 1)), Ok(7));
    assert_eq!(grid.index_of_coordinate(&Point::new(1, 0, 0)), Ok(1));
    assert_eq!(grid.index_of_coordinate(&Point::new(0, 1, 0)), Ok(2));
    assert_eq!(grid.index_of_coordinate(&Point::new(0, 0, 1)), Ok(4));
}

#[test]
fn index_coordinate_round_trip() {
    let mut rng = Rand32::new(7);

    for _ in 0..50 {
        let (_, grid) = random_grid(&mut rng);

        for index in 0..grid.num_cells() {
            let coordinate = grid.coordinate_of_index(index).unwrap();
            assert!(grid.is_coordinate_valid(&coordinate));
            assert_eq!(grid.index_of_coordinate(&coordinate), Ok(index));

            // The center of a cell is looked up back to the same cell.
            let center = grid.cell_center(&coordinate).unwrap();
            assert_eq!(grid.index_of_point(&center), Ok(index));
        }

        let len = grid.num_cells();
        assert_eq!(
            grid.coordinate_of_index(len),
            Err(VoxelError::InvalidIndex { index: len, len })
        );
    }
}

#[test]
fn snapped_bounds_cover_the_input() {
    let mut rng = Rand32::new(11);

    for _ in 0..200 {
        let (bounds, grid) = random_grid(&mut rng);
        let snapped = grid.bounds();

        assert!(snapped.loosened(1.0e-4).contains(&bounds));

        for i in 0..3 {
            let lattice = snapped.mins[i] / grid.cell_size()[i];
            assert_eq!(lattice, lattice.round());
            assert_eq!(lattice as i32, grid.lattice_origin()[i]);

            let cells = snapped.extents()[i] / grid.cell_size()[i];
            assert_relative_eq!(cells, grid.cell_counts()[i] as Real);
        }
    }
}

#[test]
fn flat_bounds_get_one_cell_per_flat_axis() {
    let bounds = Aabb::new(Point::new(0.5, 1.0, 0.0), Point::new(2.5, 1.0, 0.0));
    let grid = Grid::new(Vector::repeat(1.0), &bounds).unwrap();

    assert_eq!(grid.cell_counts(), &Vector::new(3, 1, 1));
    assert_eq!(grid.bounds().mins, Point::new(0.0, 1.0, 0.0));
    assert_eq!(grid.bounds().maxs, Point::new(3.0, 2.0, 1.0));
}

#[test]
fn out_of_range_addresses_fail() {
    let bounds = Aabb::new(Point::origin(), Point::new(2.0, 3.0, 4.0));
    let grid = Grid::new(Vector::repeat(1.0), &bounds).unwrap();

    assert!(grid.index_of_coordinate(&Point::new(2, 0, 0)).is_err());
    assert!(grid.index_of_coordinate(&Point::new(0, 3, 0)).is_err());
    assert!(grid.index_of_coordinate(&Point::new(0, 0, -1)).is_err());
    assert_eq!(
        grid.coordinate_of_point(&Point::new(1.0, 3.5, 1.0)),
        Err(VoxelError::OutOfBounds)
    );
    assert_eq!(grid.coordinate_of_point(&Point::new(2.0, 3.0, 4.0)), Ok(Point::new(1, 2, 3)));
}

use crate::grid::OccupancyGrid;
use crate::math::{Isometry, Point, Real};
use crate::shape::{HeightField, HeightSampling};
use crate::voxelization::FillMode;

/// The range of world-space heights of the surface above the column spanning
/// `[mins, maxs]` on the `x` and `y` axes.
///
/// The surface is probed at the four corners and at the center of the column. Probes falling
/// outside of the height-field footprint are ignored.
fn column_height_range(
    heightfield: &HeightField,
    pos: &Isometry<Real>,
    mins: &Point<Real>,
    maxs: &Point<Real>,
    sampling: HeightSampling,
) -> Option<(Real, Real)> {
    let mid = na::center(mins, maxs);
    let probes = [
        (mins.x, mins.y),
        (maxs.x, mins.y),
        (maxs.x, maxs.y),
        (mins.x, maxs.y),
        (mid.x, mid.y),
    ];

    let mut range: Option<(Real, Real)> = None;

    for (x, y) in probes {
        let local = pos.inverse_transform_point(&Point::new(x, y, mid.z));
        let Some(height) = heightfield.height_at(local.x, local.y, sampling) else {
            continue;
        };

        let z = (pos * Point::new(local.x, local.y, height)).z;
        range = Some(match range {
            Some((lo, hi)) => (lo.min(z), hi.max(z)),
            None => (z, z),
        });
    }

    range
}

/// Marks the cells of `local` crossed by the height-field surface, and the cells below it if
/// `fill_mode` is [`FillMode::FloodFill`].
///
/// Each column of cells is handled independently: the surface height is sampled over the
/// column and compared with the vertical range of each cell. Returns the number of columns
/// where the surface could be sampled.
pub(crate) fn rasterize_heightfield(
    local: &mut OccupancyGrid,
    heightfield: &HeightField,
    pos: &Isometry<Real>,
    sampling: HeightSampling,
    fill_mode: FillMode,
) -> usize {
    let grid = *local.grid();
    let counts = grid.cell_counts().cast::<i32>();
    let cells = local.cells_mut();
    let mut num_sampled_columns = 0;

    for y in 0..counts.y {
        for x in 0..counts.x {
            let column = grid.cell_aabb_unchecked(&Point::new(x, y, 0));
            let Some((lowest, highest)) =
                column_height_range(heightfield, pos, &column.mins, &column.maxs, sampling)
            else {
                continue;
            };

            num_sampled_columns += 1;

            for z in 0..counts.z {
                let coordinate = Point::new(x, y, z);
                let index = grid.linearize(&coordinate);

                if cells[index] {
                    continue;
                }

                let cell = grid.cell_aabb_unchecked(&coordinate);
                cells[index] = match fill_mode {
                    FillMode::SurfaceOnly => cell.mins.z <= highest && cell.maxs.z >= lowest,
                    FillMode::FloodFill => cell.mins.z <= highest,
                };
            }
        }
    }

    num_sampled_columns
}

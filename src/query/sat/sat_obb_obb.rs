use crate::math::{Matrix, Real, Vector, DEFAULT_EPSILON};
use crate::shape::OrientedBox;
use std::cmp::Ordering;

/// Bias added to the absolute rotation entries of the edge-edge axis tests.
///
/// When two edges are parallel their cross product vanishes and the projected radii computed
/// from the exact rotation entries collapse to zero: the bias keeps those axes from reporting a
/// spurious separation.
pub const SAT_AXIS_EPSILON: Real = 1.0e-4;

/// Relative tolerance below which two projections are considered to be exactly touching.
const CONTACT_TOLERANCE: Real = DEFAULT_EPSILON * 16.0;

/// Whether projections of radii `ra` and `rb` whose centers are `dist` apart are disjoint.
///
/// Touching projections are disjoint, unless one of them is flat: a zero-thickness box lying on
/// the face of another one intersects it.
#[inline]
fn separates(dist: Real, ra: Real, rb: Real) -> bool {
    let reach = ra + rb;

    if ra.min(rb) <= reach * CONTACT_TOLERANCE {
        dist > reach * (1.0 + CONTACT_TOLERANCE)
    } else {
        dist >= reach * (1.0 - CONTACT_TOLERANCE)
    }
}

fn canonical_cmp(a: &OrientedBox, b: &OrientedBox) -> Ordering {
    let key = |obb: &OrientedBox| {
        [
            obb.center.x,
            obb.center.y,
            obb.center.z,
            obb.half_extents.x,
            obb.half_extents.y,
            obb.half_extents.z,
            obb.rotation.i,
            obb.rotation.j,
            obb.rotation.k,
            obb.rotation.w,
        ]
    };

    key(a)
        .iter()
        .zip(key(b).iter())
        .map(|(x, y)| x.partial_cmp(y).unwrap_or(Ordering::Equal))
        .find(|ord| *ord != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

/// Finds a separating axis between two oriented boxes.
///
/// Tests the 15 candidate axes of the separating axis theorem: the 3 face normals of each box
/// and the 9 cross products between their axes. Returns the first axis (expressed in
/// world-space, not necessarily normalized) on which the projections of both boxes do not
/// overlap, or `None` if the boxes intersect. Boxes in exact face contact are separated, except
/// when one of them has no thickness along the contact normal.
///
/// The pair is always evaluated in the same order regardless of the order of the arguments,
/// so `obb_obb_separating_axis(a, b).is_none() == obb_obb_separating_axis(b, a).is_none()`.
pub fn obb_obb_separating_axis(obb1: &OrientedBox, obb2: &OrientedBox) -> Option<Vector<Real>> {
    if canonical_cmp(obb1, obb2) == Ordering::Greater {
        obb_obb_separating_axis_ordered(obb2, obb1)
    } else {
        obb_obb_separating_axis_ordered(obb1, obb2)
    }
}

fn obb_obb_separating_axis_ordered(a: &OrientedBox, b: &OrientedBox) -> Option<Vector<Real>> {
    let axes_a = a.axes();
    let axes_b = b.axes();
    let ea = a.half_extents;
    let eb = b.half_extents;

    // Rotation expressing `b` in the frame of `a`.
    let r = Matrix::from_fn(|i, j| axes_a[i].dot(&axes_b[j]));
    let abs_r = r.abs();
    let biased_abs_r = abs_r.add_scalar(SAT_AXIS_EPSILON);

    let t = b.center - a.center;
    let t = Vector::new(t.dot(&axes_a[0]), t.dot(&axes_a[1]), t.dot(&axes_a[2]));

    // L = A0, A1, A2
    for i in 0..3 {
        let ra = ea[i];
        let rb = eb[0] * abs_r[(i, 0)] + eb[1] * abs_r[(i, 1)] + eb[2] * abs_r[(i, 2)];

        if separates(t[i].abs(), ra, rb) {
            return Some(axes_a[i]);
        }
    }

    // L = B0, B1, B2
    for j in 0..3 {
        let ra = ea[0] * abs_r[(0, j)] + ea[1] * abs_r[(1, j)] + ea[2] * abs_r[(2, j)];
        let rb = eb[j];
        let dist = (t[0] * r[(0, j)] + t[1] * r[(1, j)] + t[2] * r[(2, j)]).abs();

        if separates(dist, ra, rb) {
            return Some(axes_b[j]);
        }
    }

    // L = Ai x Bj
    for i in 0..3 {
        let (i1, i2) = ((i + 1) % 3, (i + 2) % 3);

        for j in 0..3 {
            let (j1, j2) = ((j + 1) % 3, (j + 2) % 3);

            let ra = ea[i1] * biased_abs_r[(i2, j)] + ea[i2] * biased_abs_r[(i1, j)];
            let rb = eb[j1] * biased_abs_r[(i, j2)] + eb[j2] * biased_abs_r[(i, j1)];
            let dist = (t[i2] * r[(i1, j)] - t[i1] * r[(i2, j)]).abs();

            if separates(dist, ra, rb) {
                return Some(axes_a[i].cross(&axes_b[j]));
            }
        }
    }

    None
}

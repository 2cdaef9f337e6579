use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::Triangle;

#[inline]
fn normalize_or_zero(v: Vector<Real>) -> Vector<Real> {
    v.try_normalize(DEFAULT_EPSILON).unwrap_or_else(Vector::zeros)
}

/// Is `axis` a separating axis between a triangle and a box, both centered on the box center?
#[inline]
fn separates_on_axis(
    vertices: &[Point<Real>; 3],
    half_extents: &Vector<Real>,
    axis: &Vector<Real>,
) -> bool {
    let p0 = vertices[0].coords.dot(axis);
    let p1 = vertices[1].coords.dot(axis);
    let p2 = vertices[2].coords.dot(axis);

    // Projected half-extent of the box on `axis`.
    let r = half_extents.dot(&axis.abs());

    let min_p = p0.min(p1).min(p2);
    let max_p = p0.max(p1).max(p2);

    (-max_p).max(min_p) > r
}

/// Finds a separating axis between an AABB and a triangle.
///
/// Both shapes are translated so the box center is the origin, then 13 axes are tested in this
/// order: the 3 face normals of the box, the normal of the triangle, and the 9 cross products
/// between the box face normals and the normalized triangle edges. Returns the first separating
/// axis found, or `None` if the shapes intersect. Touching shapes intersect.
///
/// Axes that vanish because the triangle is degenerate never separate anything, so degenerate
/// triangles are handled as segments or points.
pub fn aabb_triangle_separating_axis(aabb: &Aabb, triangle: &Triangle) -> Option<Vector<Real>> {
    let center = aabb.center();
    let half_extents = aabb.half_extents();
    let vertices = [
        Point::from(triangle.a - center),
        Point::from(triangle.b - center),
        Point::from(triangle.c - center),
    ];

    let ab = normalize_or_zero(vertices[1] - vertices[0]);
    let bc = normalize_or_zero(vertices[2] - vertices[1]);
    let ca = normalize_or_zero(vertices[0] - vertices[2]);

    let box_axes = [Vector::x(), Vector::y(), Vector::z()];

    for axis in &box_axes {
        if separates_on_axis(&vertices, &half_extents, axis) {
            return Some(*axis);
        }
    }

    let normal = ab.cross(&bc);
    if separates_on_axis(&vertices, &half_extents, &normal) {
        return Some(normal);
    }

    for box_axis in &box_axes {
        for edge in [ab, bc, ca] {
            let axis = box_axis.cross(&edge);

            if separates_on_axis(&vertices, &half_extents, &axis) {
                return Some(axis);
            }
        }
    }

    None
}

//! Definition of the triangle shape.

use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON};
use crate::VoxelError;
use na::Unit;

/// A triangle shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

/// The winding of a triangle, as seen from the origin.
///
/// It is given by the sign of the signed volume of the tetrahedron formed by the origin
/// and the triangle, i.e., the sign of `(b - a) × (c - a) · a`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TriangleOrientation {
    /// The signed volume is positive.
    CounterClockwise,
    /// The signed volume is negative.
    Clockwise,
    /// The signed volume is zero: the triangle plane goes through the origin, or the
    /// triangle is degenerate.
    Degenerate,
}

impl From<[Point<Real>; 3]> for Triangle {
    fn from(arr: [Point<Real>; 3]) -> Self {
        Triangle::new(arr[0], arr[1], arr[2])
    }
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// Creates a triangle from three points, swapping `b` and `c` if needed so the result
    /// has the requested winding.
    ///
    /// A degenerate triangle cannot be re-oriented and is returned as-is.
    #[inline]
    pub fn with_winding(
        a: Point<Real>,
        b: Point<Real>,
        c: Point<Real>,
        winding: TriangleOrientation,
    ) -> Triangle {
        let tri = Triangle::new(a, b, c);

        match (tri.winding(), winding) {
            (TriangleOrientation::Degenerate, _) | (_, TriangleOrientation::Degenerate) => tri,
            (current, expected) if current == expected => tri,
            _ => tri.reversed(),
        }
    }

    /// Builds the triangles of an indexed mesh.
    ///
    /// If `winding` is set, every triangle is re-oriented with [`Triangle::with_winding`].
    /// Fails with [`VoxelError::InvalidArgument`] if an index is out of range.
    pub fn from_indexed(
        vertices: &[Point<Real>],
        indices: &[[u32; 3]],
        winding: Option<TriangleOrientation>,
    ) -> Result<Vec<Triangle>, VoxelError> {
        indices
            .iter()
            .map(|idx| {
                let vertex = |i: u32| {
                    vertices
                        .get(i as usize)
                        .copied()
                        .ok_or(VoxelError::InvalidArgument("triangle index out of range"))
                };
                let (a, b, c) = (vertex(idx[0])?, vertex(idx[1])?, vertex(idx[2])?);

                Ok(match winding {
                    Some(winding) => Triangle::with_winding(a, b, c, winding),
                    None => Triangle::new(a, b, c),
                })
            })
            .collect()
    }

    /// The three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// The winding of this triangle, as seen from the origin.
    pub fn winding(&self) -> TriangleOrientation {
        let signed_volume = self.scaled_normal().dot(&self.a.coords);

        if signed_volume > 0.0 {
            TriangleOrientation::CounterClockwise
        } else if signed_volume < 0.0 {
            TriangleOrientation::Clockwise
        } else {
            TriangleOrientation::Degenerate
        }
    }

    /// This triangle with its last two vertices swapped.
    #[inline]
    #[must_use]
    pub fn reversed(&self) -> Triangle {
        Triangle::new(self.a, self.c, self.b)
    }

    /// The normal of this triangle assuming it is oriented counter-clockwise.
    ///
    /// Returns `None` if the triangle is degenerate.
    #[inline]
    pub fn normal(&self) -> Option<Unit<Vector<Real>>> {
        Unit::try_new(self.scaled_normal(), DEFAULT_EPSILON)
    }

    /// A vector normal of this triangle, with a norm equal to twice its area.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The area of this triangle.
    #[inline]
    pub fn area(&self) -> Real {
        self.scaled_normal().norm() * 0.5
    }

    /// The centroid of this triangle.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        Point::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }

    /// Is this triangle degenerate (collinear or coincident vertices)?
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.scaled_normal().norm_squared() <= DEFAULT_EPSILON * DEFAULT_EPSILON
    }

    /// The barycentric coordinates of the projection of `pt` on the plane of this triangle.
    ///
    /// The coordinates weight `a`, `b` and `c` respectively and sum to one. Returns `None` if
    /// the triangle is degenerate.
    pub fn barycentric_coordinates(&self, pt: &Point<Real>) -> Option<[Real; 3]> {
        let ac = self.a - self.c;
        let bc = self.b - self.c;
        let pc = pt - self.c;

        let m00 = ac.dot(&ac);
        let m01 = ac.dot(&bc);
        let m11 = bc.dot(&bc);
        let r0 = ac.dot(&pc);
        let r1 = bc.dot(&pc);

        let det = m00 * m11 - m01 * m01;

        if det.abs() <= DEFAULT_EPSILON {
            return None;
        }

        let inv_det = 1.0 / det;
        let u = (m11 * r0 - m01 * r1) * inv_det;
        let v = (m00 * r1 - m01 * r0) * inv_det;

        Some([u, v, 1.0 - u - v])
    }

    /// The point with the given barycentric coordinates relative to `a`, `b` and `c`.
    #[inline]
    pub fn point_from_barycentric(&self, bcoords: &[Real; 3]) -> Point<Real> {
        Point::from(
            self.a.coords * bcoords[0] + self.b.coords * bcoords[1] + self.c.coords * bcoords[2],
        )
    }

    /// This triangle with each vertex pushed away from the centroid by `delta`.
    ///
    /// A negative `delta` shrinks the triangle. Vertices lying on the centroid do not move.
    #[must_use]
    pub fn inflated(&self, delta: Real) -> Triangle {
        let center = self.center();
        let push = |pt: Point<Real>| {
            let dir = pt - center;
            match Unit::try_new(dir, DEFAULT_EPSILON) {
                Some(dir) => pt + *dir * delta,
                None => pt,
            }
        };

        Triangle::new(push(self.a), push(self.b), push(self.c))
    }

    /// This triangle translated by `translation`.
    #[inline]
    #[must_use]
    pub fn translated(&self, translation: &Vector<Real>) -> Triangle {
        Triangle::new(
            self.a + translation,
            self.b + translation,
            self.c + translation,
        )
    }

    /// Returns a new triangle with vertices transformed by `m`.
    #[inline]
    pub fn transformed(&self, m: &Isometry<Real>) -> Self {
        Triangle::new(m * self.a, m * self.b, m * self.c)
    }

    /// The AABB of this triangle.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_points(self.vertices())
    }
}

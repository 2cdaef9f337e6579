use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::{Triangle, TriangleOrientation};
use crate::VoxelError;

/// A convex hull given as an indexed triangle mesh.
///
/// The mesh is rasterized triangle by triangle. Its convexity is only relied upon by
/// [`ConvexMesh::contains_point`], which the solid fill mode uses to mark interior cells.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub struct ConvexMesh {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
}

impl ConvexMesh {
    /// Creates a convex mesh from its vertex buffer and its triangle index buffer.
    ///
    /// Fails with [`VoxelError::InvalidArgument`] if there is no triangle or if an index does
    /// not refer to an existing vertex.
    pub fn new(vertices: Vec<Point<Real>>, indices: Vec<[u32; 3]>) -> Result<Self, VoxelError> {
        if indices.is_empty() {
            return Err(VoxelError::InvalidArgument(
                "a convex mesh needs at least one triangle",
            ));
        }

        let num_vertices = vertices.len();
        if indices.iter().flatten().any(|i| *i as usize >= num_vertices) {
            return Err(VoxelError::InvalidArgument("triangle index out of range"));
        }

        Ok(Self { vertices, indices })
    }

    /// The vertex buffer of this mesh.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The index buffer of this mesh.
    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    fn local_triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.indices.iter().map(|idx| {
            Triangle::new(
                self.vertices[idx[0] as usize],
                self.vertices[idx[1] as usize],
                self.vertices[idx[2] as usize],
            )
        })
    }

    /// The triangles of this mesh once placed at `pos`.
    ///
    /// Non-degenerate triangles are re-oriented to `winding` if it is set.
    pub fn triangles(
        &self,
        pos: &Isometry<Real>,
        winding: Option<TriangleOrientation>,
    ) -> Vec<Triangle> {
        self.local_triangles()
            .map(|tri| {
                let [a, b, c] = tri.transformed(pos).vertices();
                match winding {
                    Some(winding) => Triangle::with_winding(a, b, c, winding),
                    None => Triangle::new(a, b, c),
                }
            })
            .collect()
    }

    /// The centroid of the vertex buffer.
    pub fn vertex_centroid(&self) -> Point<Real> {
        let sum = self
            .vertices
            .iter()
            .fold(Vector::zeros(), |acc, pt| acc + pt.coords);
        Point::from(sum / self.vertices.len().max(1) as Real)
    }

    /// Is the local point `pt` inside of this hull or on its boundary?
    ///
    /// Each face plane is oriented away from the vertex centroid, so the result does not depend
    /// on the winding of the index buffer. Degenerate faces are ignored.
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        let centroid = self.vertex_centroid();
        let mut num_planes = 0;

        for tri in self.local_triangles() {
            let Some(normal) = tri.normal() else {
                continue;
            };

            let outward = if normal.dot(&(tri.a - centroid)) < 0.0 {
                -normal.into_inner()
            } else {
                normal.into_inner()
            };

            let tolerance = DEFAULT_EPSILON * 16.0 * (tri.a - centroid).norm().max(1.0);
            if outward.dot(&(pt - tri.a)) > tolerance {
                return false;
            }

            num_planes += 1;
        }

        // A flat hull has no interior.
        num_planes >= 4
    }

    /// Applies the transformation `pos` to every vertex of this mesh.
    pub fn transformed(mut self, pos: &Isometry<Real>) -> Self {
        self.vertices.iter_mut().for_each(|pt| *pt = pos * *pt);
        self
    }

    /// Computes a scaled version of this mesh.
    pub fn scaled(mut self, scale: &Vector<Real>) -> Self {
        self.vertices
            .iter_mut()
            .for_each(|pt| pt.coords.component_mul_assign(scale));
        self
    }
}

//!
//! Shape composed from the union of primitives.
//!

use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Isometry, Real, Vector};
use crate::shape::SceneShape;
use crate::VoxelError;

/// A compound shape with an aabb bounding volume.
///
/// A compound shape is the union of several simpler shapes, each with its own delta
/// transformation relative to the compound origin. All the parts of a compound are rasterized
/// into one shared local occupancy grid, so a cell marked by one part is not tested again by
/// the following parts.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Compound {
    shapes: Vec<(Isometry<Real>, SceneShape)>,
    aabbs: Vec<Aabb>,
    aabb: Aabb,
}

impl Compound {
    /// Builds a new compound shape from a collection of sub-shapes.
    ///
    /// Fails with [`VoxelError::InvalidArgument`] if `shapes` is empty or if one of the parts
    /// is itself a compound (nested compounds are not allowed).
    pub fn new(shapes: Vec<(Isometry<Real>, SceneShape)>) -> Result<Compound, VoxelError> {
        if shapes.is_empty() {
            return Err(VoxelError::InvalidArgument(
                "a compound shape must contain at least one shape",
            ));
        }

        if shapes
            .iter()
            .any(|(_, shape)| matches!(shape, SceneShape::Compound(_)))
        {
            return Err(VoxelError::InvalidArgument(
                "nested compound shapes are not allowed",
            ));
        }

        Ok(Self::with_parts(shapes))
    }

    fn with_parts(shapes: Vec<(Isometry<Real>, SceneShape)>) -> Compound {
        let aabbs: Vec<_> = shapes.iter().map(|(delta, shape)| shape.aabb(delta)).collect();
        let aabb = aabbs
            .iter()
            .fold(Aabb::new_invalid(), |acc, bv| acc.merged(bv));

        Compound {
            shapes,
            aabbs,
            aabb,
        }
    }

    /// The shapes of this compound shape, with their position relative to the compound origin.
    #[inline]
    pub fn shapes(&self) -> &[(Isometry<Real>, SceneShape)] {
        &self.shapes[..]
    }

    /// The [`Aabb`] of this compound in its local-space.
    #[inline]
    pub fn local_aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// The shapes local-space [`Aabb`]s.
    #[inline]
    pub fn aabbs(&self) -> &[Aabb] {
        &self.aabbs[..]
    }

    /// Computes a scaled version of this compound.
    ///
    /// Each part is scaled and its relative translation is scaled component-wise. The rotation
    /// of the parts is kept, so a non-uniform scale applied to a rotated part is approximated.
    pub fn scaled(self, scale: &Vector<Real>) -> Self {
        let shapes = self
            .shapes
            .into_iter()
            .map(|(mut delta, shape)| {
                delta
                    .translation
                    .vector
                    .component_mul_assign(scale);
                (delta, shape.scaled(scale))
            })
            .collect();

        Compound::with_parts(shapes)
    }
}

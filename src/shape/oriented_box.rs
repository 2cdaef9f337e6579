//! Definition of the oriented bounding box proxy.

use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Rotation, Translation, Vector, DEFAULT_EPSILON};
use crate::query::sat;
use crate::shape::Cuboid;
use crate::utils::IsometryOps;

/// A box with an arbitrary orientation, placed in world-space.
///
/// This is the proxy used to rasterize boxes: it is built once per shape instance and tested
/// against every cell of the instance's local grid with the separating axis theorem.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct OrientedBox {
    /// The world-space center of the box.
    pub center: Point<Real>,
    /// The half-extents of the box along its local axes.
    pub half_extents: Vector<Real>,
    /// The rotation from the box local frame to world-space.
    pub rotation: Rotation<Real>,
    /// If `true`, merging another box into this one uses the orientation halfway between both
    /// boxes instead of keeping the orientation of `self`.
    pub slerp_rotation: bool,
}

impl OrientedBox {
    /// Creates a new oriented box.
    pub fn new(center: Point<Real>, half_extents: Vector<Real>, rotation: Rotation<Real>) -> Self {
        Self {
            center,
            half_extents,
            rotation,
            slerp_rotation: false,
        }
    }

    /// The oriented box covering `local_aabb` after scaling it by `scale` and moving it by `pos`.
    ///
    /// Negative scale components mirror the box and leave its extents positive.
    pub fn from_local_aabb(local_aabb: &Aabb, pos: &Isometry<Real>, scale: &Vector<Real>) -> Self {
        let center = pos * Point::from(local_aabb.center().coords.component_mul(scale));
        let half_extents = local_aabb.half_extents().component_mul(&scale.abs());
        Self::new(center, half_extents, pos.rotation)
    }

    /// The oriented box occupied by `cuboid` once placed at `pos`.
    pub fn from_cuboid(cuboid: &Cuboid, pos: &Isometry<Real>) -> Self {
        Self::new(
            Point::from(pos.translation.vector),
            cuboid.half_extents,
            pos.rotation,
        )
    }

    /// The oriented box equal to `aabb`, with an identity rotation.
    pub fn from_aabb(aabb: &Aabb) -> Self {
        Self::new(aabb.center(), aabb.half_extents(), Rotation::identity())
    }

    /// Sets the [`OrientedBox::slerp_rotation`] flag.
    #[must_use]
    pub fn with_slerp_rotation(mut self, slerp_rotation: bool) -> Self {
        self.slerp_rotation = slerp_rotation;
        self
    }

    /// The three unit axes of this box, expressed in world-space.
    #[inline]
    pub fn axes(&self) -> [Vector<Real>; 3] {
        let rot = self.rotation.to_rotation_matrix();
        let m = rot.matrix();
        [
            m.column(0).into_owned(),
            m.column(1).into_owned(),
            m.column(2).into_owned(),
        ]
    }

    /// The pose of this box, i.e., the isometry mapping its local frame to world-space.
    #[inline]
    pub fn position(&self) -> Isometry<Real> {
        Isometry::from_parts(Translation::from(self.center.coords), self.rotation)
    }

    /// The eight corners of this box, in world-space.
    pub fn vertices(&self) -> [Point<Real>; 8] {
        let pos = self.position();
        Aabb::from_half_extents(Point::origin(), self.half_extents)
            .vertices()
            .map(|pt| pos * pt)
    }

    /// The world-space AABB of this box.
    pub fn aabb(&self) -> Aabb {
        let ws_half_extents = self.position().absolute_transform_vector(&self.half_extents);
        Aabb::from_half_extents(self.center, ws_half_extents)
    }

    /// Expresses a world-space point in the local frame of this box.
    #[inline]
    fn local_point(&self, pt: &Point<Real>) -> Vector<Real> {
        self.rotation.inverse_transform_vector(&(pt - self.center))
    }

    /// Is the point inside of this box or on its boundary?
    ///
    /// Points off the boundary by rounding errors only are on the boundary.
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        let local = self.local_point(pt);
        (0..3).all(|i| {
            let dist = local[i].abs();
            dist <= self.half_extents[i] || relative_eq!(dist, self.half_extents[i])
        })
    }

    /// Are all the corners of `other` inside of this box or on its boundary?
    pub fn contains(&self, other: &OrientedBox) -> bool {
        other.vertices().iter().all(|pt| self.contains_point(pt))
    }

    /// Do the interiors of both boxes overlap?
    ///
    /// Boxes in face contact do not intersect.
    pub fn intersects(&self, other: &OrientedBox) -> bool {
        self.separating_axis(other).is_none()
    }

    /// Finds an axis, among the 15 candidate axes of the separating axis theorem, that
    /// separates both boxes.
    pub fn separating_axis(&self, other: &OrientedBox) -> Option<Vector<Real>> {
        sat::obb_obb_separating_axis(self, other)
    }

    /// Merges `other` into this box.
    ///
    /// The result is expressed in the frame of `self`, or in the frame halfway between both
    /// boxes if [`OrientedBox::slerp_rotation`] is set, and encloses both boxes.
    pub fn merge(&mut self, other: &OrientedBox) {
        *self = self.merged(other);
    }

    /// Computes the smallest box, in a frame chosen as in [`OrientedBox::merge`], enclosing both
    /// boxes.
    #[must_use]
    pub fn merged(&self, other: &OrientedBox) -> OrientedBox {
        let rotation = if self.slerp_rotation {
            self.rotation
                .try_slerp(&other.rotation, 0.5, DEFAULT_EPSILON)
                .unwrap_or(self.rotation)
        } else {
            self.rotation
        };

        let mut mins = Vector::repeat(Real::MAX);
        let mut maxs = Vector::repeat(-Real::MAX);

        for pt in self.vertices().iter().chain(other.vertices().iter()) {
            let local = rotation.inverse_transform_vector(&(pt - self.center));
            mins = mins.inf(&local);
            maxs = maxs.sup(&local);
        }

        OrientedBox {
            center: self.center + rotation * ((mins + maxs) * 0.5),
            half_extents: (maxs - mins) * 0.5,
            rotation,
            slerp_rotation: self.slerp_rotation,
        }
    }
}

//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::aabb::Aabb;

#[doc(inline)]
pub use crate::bounding_volume::bounding_sphere::BoundingSphere;
#[doc(inline)]
pub use crate::bounding_volume::bounding_volume::BoundingVolume;

#[doc(hidden)]
pub mod bounding_volume;

#[doc(hidden)]
pub mod aabb;
mod aabb_ball;
mod aabb_capsule;
mod aabb_compound;
mod aabb_convex_mesh;
mod aabb_cuboid;
mod aabb_heightfield;

#[doc(hidden)]
pub mod bounding_sphere;

/// Free functions for some special cases of bounding-volume computation.
pub mod details {
    pub use super::aabb_ball::ball_aabb;
}

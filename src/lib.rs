/*!
voxelate3d
==========

**voxelate3d** rasterizes 3D shapes into boolean occupancy grids. Boxes, spheres, capsules,
convex hulls, height-fields and compounds of them are supported.

The crate is organized in layers:
- [`grid`]: the uniform grid addressing model and the boolean occupancy store.
- [`shape`]: the geometric proxies (oriented boxes, capsules, balls, triangles, ...).
- [`query`]: the shape-vs-AABB intersection predicates, mostly separating-axis tests.
- [`voxelization`]: the rasterizer that ties everything together.
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![deny(unused_qualifications)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![doc(html_root_url = "http://docs.rs/voxelate3d/0.1.0")]

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod grid;
pub mod query;
pub mod shape;
pub mod utils;
pub mod voxelization;

mod error;

pub use crate::error::VoxelError;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    use na::UnitQuaternion;
    pub use na::{Isometry3, Matrix3, Point3, Translation3, Vector2, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;

    /// The rotation type.
    pub type Rotation<N> = UnitQuaternion<N>;

    /// The translation type.
    pub use Translation3 as Translation;
}

//! Shapes supported by voxelate3d.
//!
//! [`SceneShape`] enumerates what a scene can hand to the voxelizer. [`OrientedBox`],
//! [`Capsule`], [`Triangle`] and [`crate::bounding_volume::BoundingSphere`] are the
//! world-space proxies the voxelizer actually tests against grid cells.

pub use self::ball::Ball;
pub use self::capsule::Capsule;
pub use self::compound::Compound;
pub use self::convex_mesh::ConvexMesh;
pub use self::cuboid::Cuboid;
pub use self::heightfield::{HeightField, HeightSampling};
pub use self::oriented_box::OrientedBox;
#[doc(inline)]
pub use self::scene_shape::{SceneShape, ShapeInstance, ShapeType};
pub use self::segment::Segment;
pub use self::triangle::{Triangle, TriangleOrientation};

mod ball;
mod capsule;
mod compound;
mod convex_mesh;
mod cuboid;
mod heightfield;
mod oriented_box;
mod scene_shape;
mod segment;
mod triangle;

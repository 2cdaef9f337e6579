//! Shape-vs-AABB intersection predicates.
//!
//! These are the predicates deciding whether a grid cell is occupied by a shape. All of them
//! take world-space shapes: proxies are built once per shape instance and reused for every
//! cell.

pub use self::intersection_test::AabbIntersection;
pub use self::intersection_test_aabb_ball::intersection_test_aabb_ball;
pub use self::intersection_test_aabb_capsule::intersection_test_aabb_capsule;
pub use self::intersection_test_aabb_triangle::intersection_test_aabb_triangle;
pub use self::intersection_test_obb_obb::{intersection_test_aabb_obb, intersection_test_obb_obb};

mod intersection_test_aabb_ball;
mod intersection_test_aabb_capsule;
mod intersection_test_aabb_triangle;
mod intersection_test_obb_obb;

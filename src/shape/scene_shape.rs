use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Real, Vector};
use crate::shape::{Ball, Capsule, Compound, ConvexMesh, Cuboid, HeightField};

/// Enum representing the type of a shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeType {
    /// A cuboid shape.
    Cuboid,
    /// A ball shape.
    Ball,
    /// A capsule shape.
    Capsule,
    /// A convex mesh shape.
    ConvexMesh,
    /// A heightfield shape.
    HeightField,
    /// A Compound shape.
    Compound,
}

/// A shape supplied by a scene, expressed in its local-space.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum SceneShape {
    /// A box, rasterized as a solid.
    Cuboid(Cuboid),
    /// A sphere, rasterized as a solid.
    Ball(Ball),
    /// A capsule, rasterized as a solid.
    Capsule(Capsule),
    /// A convex hull given as a triangle list.
    ConvexMesh(ConvexMesh),
    /// A terrain.
    HeightField(HeightField),
    /// A union of non-compound shapes.
    Compound(Compound),
}

impl SceneShape {
    /// The type of this shape.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            SceneShape::Cuboid(_) => ShapeType::Cuboid,
            SceneShape::Ball(_) => ShapeType::Ball,
            SceneShape::Capsule(_) => ShapeType::Capsule,
            SceneShape::ConvexMesh(_) => ShapeType::ConvexMesh,
            SceneShape::HeightField(_) => ShapeType::HeightField,
            SceneShape::Compound(_) => ShapeType::Compound,
        }
    }

    /// Computes the world-space [`Aabb`] of this shape, transformed by `pos`.
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        match self {
            SceneShape::Cuboid(s) => s.aabb(pos),
            SceneShape::Ball(s) => s.aabb(pos),
            SceneShape::Capsule(s) => s.aabb(pos),
            SceneShape::ConvexMesh(s) => s.aabb(pos),
            SceneShape::HeightField(s) => s.aabb(pos),
            SceneShape::Compound(s) => s.aabb(pos),
        }
    }

    /// Computes a scaled version of this shape.
    ///
    /// Shapes that cannot represent a non-uniform scale exactly (balls, capsules) are shrunk
    /// to the smallest absolute scale component.
    pub fn scaled(self, scale: &Vector<Real>) -> Self {
        match self {
            SceneShape::Cuboid(s) => SceneShape::Cuboid(s.scaled(scale)),
            SceneShape::Ball(s) => SceneShape::Ball(s.scaled(scale)),
            SceneShape::Capsule(s) => SceneShape::Capsule(s.scaled(scale)),
            SceneShape::ConvexMesh(s) => SceneShape::ConvexMesh(s.scaled(scale)),
            SceneShape::HeightField(s) => SceneShape::HeightField(s.scaled(scale)),
            SceneShape::Compound(s) => SceneShape::Compound(s.scaled(scale)),
        }
    }
}

macro_rules! impl_from_shape(
    ($($Shape: ident),*) => {$(
        impl From<$Shape> for SceneShape {
            fn from(shape: $Shape) -> Self {
                SceneShape::$Shape(shape)
            }
        }
    )*}
);

impl_from_shape!(Cuboid, Ball, Capsule, ConvexMesh, HeightField, Compound);

/// A shape placed in world-space.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeInstance {
    /// The shape, in its local-space.
    pub shape: SceneShape,
    /// The transform from the shape local-space to world-space.
    pub position: Isometry<Real>,
}

impl ShapeInstance {
    /// Places `shape` at `position`.
    pub fn new(shape: impl Into<SceneShape>, position: Isometry<Real>) -> Self {
        Self {
            shape: shape.into(),
            position,
        }
    }

    /// Places `shape`, scaled by `scale` in its local-space, at `position`.
    pub fn scaled(
        shape: impl Into<SceneShape>,
        position: Isometry<Real>,
        scale: &Vector<Real>,
    ) -> Self {
        Self::new(shape.into().scaled(scale), position)
    }

    /// The world-space [`Aabb`] of this instance.
    pub fn aabb(&self) -> Aabb {
        self.shape.aabb(&self.position)
    }
}

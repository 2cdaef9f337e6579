use crate::shape::HeightSampling;

/// Controls how the interior of hollow shapes is rasterized.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FillMode {
    /// Only the cells crossing the surface of convex meshes and height-fields are occupied.
    #[default]
    SurfaceOnly,
    /// The cells inside of convex meshes and below height-fields are occupied too.
    FloodFill,
}

/// Parameters of a [`crate::voxelization::Voxelizer`].
///
/// Boxes, balls and capsules are always rasterized as solids; `fill_mode` and
/// `height_sampling` only affect convex meshes and height-fields.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VoxelizerOptions {
    /// How convex meshes and height-fields are filled.
    pub fill_mode: FillMode,
    /// How height-fields are sampled between their samples.
    pub height_sampling: HeightSampling,
    /// If `true`, [`crate::voxelization::Voxelizer::rasterize`] clips every shape to the
    /// bounds of the target grid instead of failing on shapes sticking out of it.
    pub clip_to_target: bool,
    /// The maximum number of cells of any grid the voxelizer allocates.
    pub max_cells: usize,
}

impl Default for VoxelizerOptions {
    fn default() -> Self {
        Self {
            fill_mode: FillMode::SurfaceOnly,
            height_sampling: HeightSampling::Nearest,
            clip_to_target: false,
            max_cells: 1 << 30,
        }
    }
}

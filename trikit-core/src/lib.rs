/// trikit core library - triangle geometry and interpolation
///
/// Pure, stateless math for triangle rasterization: bounding boxes, signed
/// area, barycentric coordinates, coverage tests, attribute interpolation
/// and nearest-neighbor texture sampling. Every function is reentrant and
/// safe to call from any number of threads at once.

pub mod barycentric;
pub mod error;
pub mod geometry;
pub mod interpolate;
pub mod shading;
pub mod texture;
pub mod transform;

// Re-export the public surface
pub use barycentric::{barycentric, is_inside, try_barycentric, Barycentric};
pub use error::{Error, Result};
pub use geometry::{
    bounding_box, face_normal, is_degenerate, signed_area, Aabb, Triangle,
    DEGENERATE_AREA_EPSILON,
};
pub use interpolate::{
    interpolate, interpolate_color, interpolate_depth, interpolate_normal, interpolate_texcoord,
};
pub use shading::{Fragment, ShadedTriangle, Vertex};
pub use texture::{sample_texture, TextureView};
pub use transform::{transform_direction, transform_point, transform_position, transform_triangle};

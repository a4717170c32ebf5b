//! Small planar and spatial vector types used by the face projection.

pub mod vec2d;
pub mod vec3d;

pub use vec2d::Vec2d;
pub use vec3d::Vec3d;

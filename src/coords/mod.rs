//! Discrete grid coordinates: IJK on a single plane, and face-anchored IJK on the icosahedron.

pub mod cube;
pub mod face;

pub use cube::CubeCoord;
pub use face::FaceCoord;

//! Mesh engine: the jittered grid, its triangles and the lights over it.

pub mod frame;
pub mod light;
pub mod params;
pub mod polygon;

//! Lighting module.
//!
//! Flat shading of mesh polygons by a set of coloured point lights:
//! - Linear distance falloff, cut off at a maximum distance
//! - Lambert-like angle term with an ambient floor
//! - Additive mixing of all lights

pub mod shading;

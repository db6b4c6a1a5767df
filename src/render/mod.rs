//! Rendering onto a 2D drawing surface.

pub mod canvas;
pub mod draw;
pub mod recording;
pub mod sink;

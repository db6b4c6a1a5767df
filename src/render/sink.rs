//! The drawing surface the mesh is rendered onto.

use crate::error::SinkError;

/// A 2D surface that accepts filled and stroked paths.
///
/// The calls mirror the canvas 2D API. Colours are CSS strings (`#rrggbb`).
pub trait DrawingSink {
    /// Fill the whole surface with one colour.
    fn fill_background(&mut self, color: &str) -> Result<(), SinkError>;

    fn begin_path(&mut self) -> Result<(), SinkError>;

    fn move_to(&mut self, x: f64, y: f64) -> Result<(), SinkError>;

    fn line_to(&mut self, x: f64, y: f64) -> Result<(), SinkError>;

    fn close_path(&mut self) -> Result<(), SinkError>;

    /// Fill the current path.
    fn fill(&mut self, color: &str) -> Result<(), SinkError>;

    /// Stroke the current path.
    fn stroke(&mut self, color: &str, line_width: f64) -> Result<(), SinkError>;
}

impl<S: DrawingSink + ?Sized> DrawingSink for &mut S {
    fn fill_background(&mut self, color: &str) -> Result<(), SinkError> {
        (**self).fill_background(color)
    }

    fn begin_path(&mut self) -> Result<(), SinkError> {
        (**self).begin_path()
    }

    fn move_to(&mut self, x: f64, y: f64) -> Result<(), SinkError> {
        (**self).move_to(x, y)
    }

    fn line_to(&mut self, x: f64, y: f64) -> Result<(), SinkError> {
        (**self).line_to(x, y)
    }

    fn close_path(&mut self) -> Result<(), SinkError> {
        (**self).close_path()
    }

    fn fill(&mut self, color: &str) -> Result<(), SinkError> {
        (**self).fill(color)
    }

    fn stroke(&mut self, color: &str, line_width: f64) -> Result<(), SinkError> {
        (**self).stroke(color, line_width)
    }
}

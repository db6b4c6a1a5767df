//! Coloured point lights.

use crate::math::color::Color;
use crate::math::vector::Vector;

/// A coloured point source in mesh space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    color: Color,
    position: Vector,
    /// Where the light was placed at creation.
    original_position: Vector,
}

impl Light {
    pub fn new(color: Color, position: Vector) -> Self {
        Self { color, position, original_position: position }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn position(&self) -> Vector {
        self.position
    }

    pub fn original_position(&self) -> Vector {
        self.original_position
    }
}

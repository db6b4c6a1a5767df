//! Triangles of the mesh.

use crate::math::vector::Vector;

/// A triangle with three corners. The atomic unit for shading and drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Polygon {
    pub a: Vector,
    pub b: Vector,
    pub c: Vector,
}

impl Polygon {
    pub const fn new(a: Vector, b: Vector, c: Vector) -> Self {
        Self { a, b, c }
    }

    /// Normal of the triangle, flipped where needed so that z is never negative.
    ///
    /// Winding does not matter: both windings of the same corners give the same vector.
    pub fn orthogonal(&self) -> Vector {
        let o = self.a.sub(self.b).cross(self.a.sub(self.c));
        if o.z < 0.0 { -o } else { o }
    }

    /// Centroid.
    pub fn center(&self) -> Vector {
        self.a.add(self.b).add(self.c).mult(1.0 / 3.0)
    }

    pub fn vertices(&self) -> [Vector; 3] {
        [self.a, self.b, self.c]
    }
}

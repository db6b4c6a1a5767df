//! 3D vector algebra with f64 precision.
//!
//! [`Vec3`] is generic over a zero-sized [`Kind`] marker. Every operation that
//! builds a new vector returns the kind of the receiver, so a colour combined
//! with anything stays a colour and a point stays a point.

use std::f64::consts::FRAC_PI_2;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Mul, Neg, Sub};

use super::utils;

/// Marker for what the three components of a [`Vec3`] mean.
pub trait Kind: Copy + Clone + Default + PartialEq + fmt::Debug {
    /// Name used by the `Debug` output.
    const NAME: &'static str;
}

/// Geometric space: components are x, y, z coordinates.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Space;

impl Kind for Space {
    const NAME: &'static str = "Vector";
}

/// Colour space: components are red, green, blue channels.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Rgb;

impl Kind for Rgb {
    const NAME: &'static str = "Color";
}

/// Immutable three-component vector.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct Vec3<K: Kind = Space> {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    kind: PhantomData<K>,
}

/// A point or direction in mesh space.
pub type Vector = Vec3<Space>;

impl<K: Kind> fmt::Debug for Vec3<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(K::NAME)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .finish()
    }
}

impl<K: Kind> Vec3<K> {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z, kind: PhantomData }
    }

    #[inline(always)]
    pub fn add<O: Kind>(self, other: Vec3<O>) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    #[inline(always)]
    pub fn sub<O: Kind>(self, other: Vec3<O>) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    #[inline(always)]
    pub fn mult(self, value: f64) -> Self {
        Self::new(self.x * value, self.y * value, self.z * value)
    }

    /// Standard right-handed cross product. Parallel operands give the zero vector.
    #[inline(always)]
    pub fn cross<O: Kind>(self, other: Vec3<O>) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline(always)]
    pub fn dot<O: Kind>(self, other: Vec3<O>) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean norm.
    #[inline(always)]
    pub fn len(self) -> f64 {
        self.dot(self).sqrt()
    }

    #[inline(always)]
    pub fn dist<O: Kind>(self, other: Vec3<O>) -> f64 {
        self.sub(other).len()
    }

    /// Angle between the two vectors in `[0, π]`.
    ///
    /// A zero-length operand has no direction; the angle is reported as π/2,
    /// which makes the operands count as perpendicular.
    pub fn angle_between<O: Kind>(self, other: Vec3<O>) -> f64 {
        let lengths = self.len() * other.len();
        if lengths < 1e-30 {
            return FRAC_PI_2;
        }
        // Rounding can push the ratio a hair past ±1
        utils::clamp(self.dot(other) / lengths, -1.0, 1.0).acos()
    }

    /// Reinterpret the components as another kind.
    pub fn cast<O: Kind>(self) -> Vec3<O> {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl<K: Kind> Add for Vec3<K> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<K: Kind> Sub for Vec3<K> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<K: Kind> Mul<f64> for Vec3<K> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl<K: Kind> Neg for Vec3<K> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::color::Color;
    use std::f64::consts::PI;

    fn samples() -> Vec<Vector> {
        vec![
            Vector::new(1.0, 2.0, 3.0),
            Vector::new(-4.5, 0.25, 7.0),
            Vector::new(1e3, -2e3, 0.001),
            Vector::new(0.0, 0.0, 0.0),
            Vector::new(-0.3, -0.7, 12.5),
        ]
    }

    #[test]
    fn test_add_then_sub_restores() {
        for a in samples() {
            for b in samples() {
                let r = a.add(b).sub(b);
                assert!((r.x - a.x).abs() < 1e-9);
                assert!((r.y - a.y).abs() < 1e-9);
                assert!((r.z - a.z).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_cross_is_orthogonal() {
        for a in samples() {
            for b in samples() {
                let c = a.cross(b);
                let scale = (a.len() * b.len()).max(1.0);
                assert!(c.dot(a).abs() / scale < 1e-6, "{a:?} x {b:?} = {c:?}");
                assert!(c.dot(b).abs() / scale < 1e-6, "{a:?} x {b:?} = {c:?}");
            }
        }
    }

    #[test]
    fn test_cross_unit_axes() {
        let c = Vector::new(1.0, 0.0, 0.0).cross(Vector::new(0.0, 1.0, 0.0));
        assert!((c.x - 0.0).abs() < 1e-10);
        assert!((c.y - 0.0).abs() < 1e-10);
        assert!((c.z - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_cross_parallel_is_zero() {
        let a = Vector::new(1.0, 2.0, 3.0);
        assert_eq!(a.cross(a.mult(2.0)), Vector::ZERO);
    }

    #[test]
    fn test_len_and_dist() {
        assert!((Vector::new(3.0, 0.0, 4.0).len() - 5.0).abs() < 1e-10);
        let a = Vector::new(1.0, 1.0, 1.0);
        let b = Vector::new(4.0, 5.0, 1.0);
        assert!((a.dist(b) - 5.0).abs() < 1e-10);
        assert!((b.dist(a) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_angle_between() {
        let x = Vector::new(2.0, 0.0, 0.0);
        let y = Vector::new(0.0, 3.0, 0.0);
        assert!((x.angle_between(y) - PI / 2.0).abs() < 1e-10);
        assert!(x.angle_between(x.mult(5.0)).abs() < 1e-7);
        assert!((x.angle_between(-x) - PI).abs() < 1e-7);
    }

    #[test]
    fn test_angle_between_zero_length_is_right_angle() {
        let a = Vector::new(1.0, 2.0, 3.0);
        assert_eq!(a.angle_between(Vector::ZERO), FRAC_PI_2);
        assert_eq!(Vector::ZERO.angle_between(a), FRAC_PI_2);
        assert!(!Vector::ZERO.angle_between(Vector::ZERO).is_nan());
    }

    #[test]
    fn test_operations_keep_receiver_kind() {
        let c: Color = Color::new(10.0, 20.0, 30.0).add(Vector::new(1.0, 1.0, 1.0));
        assert_eq!(c, Color::new(11.0, 21.0, 31.0));

        let c: Color = Color::new(1.0, 0.0, 0.0).cross(Color::new(0.0, 1.0, 0.0)).mult(2.0);
        assert_eq!(c, Color::new(0.0, 0.0, 2.0));

        let v: Vector = c.cast();
        assert_eq!(v.to_array(), [0.0, 0.0, 2.0]);
    }

    #[test]
    fn test_operators_match_methods() {
        let a = Vector::new(1.0, -2.0, 0.5);
        let b = Vector::new(0.5, 4.0, -1.0);
        assert_eq!(a + b, a.add(b));
        assert_eq!(a - b, a.sub(b));
        assert_eq!(a * 3.0, a.mult(3.0));
        assert_eq!(-a, a.mult(-1.0));
    }

    #[test]
    fn test_debug_names_kind() {
        assert!(format!("{:?}", Vector::ZERO).starts_with("Vector"));
        assert!(format!("{:?}", Color::ZERO).starts_with("Color"));
    }
}

//! Geometry primitives for vertex payloads: [`Vec2`] and the [`Coords`] trait.
//!
//! Graphs are generic over their payload, but the built-in heuristics and
//! grid generators work on planar positions. Anything implementing
//! [`Coords`] can be laid out on a plane.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

// ---------------------------------------------------------------------------
// Vec2
// ---------------------------------------------------------------------------

/// A 2D position in world units. X grows right, Y grows down.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Straight-line distance to `other`.
    #[inline]
    pub fn distance(self, other: Vec2) -> f64 {
        (other - self).length()
    }

    /// Squared distance to `other`. Cheaper than [`distance`](Self::distance)
    /// when only comparing.
    #[inline]
    pub fn distance_squared(self, other: Vec2) -> f64 {
        let d = other - self;
        d.x * d.x + d.y * d.y
    }

    /// Sum of absolute coordinate differences to `other`.
    #[inline]
    pub fn manhattan(self, other: Vec2) -> f64 {
        (other.x - self.x).abs() + (other.y - self.y).abs()
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vec2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Vec2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

// ---------------------------------------------------------------------------
// Coords
// ---------------------------------------------------------------------------

/// A payload that has a position on the plane.
pub trait Coords {
    /// The payload's position.
    fn coords(&self) -> Vec2;
}

impl Coords for Vec2 {
    #[inline]
    fn coords(&self) -> Vec2 {
        *self
    }
}

impl Coords for (f64, f64) {
    #[inline]
    fn coords(&self) -> Vec2 {
        Vec2::new(self.0, self.1)
    }
}

impl Coords for [f64; 2] {
    #[inline]
    fn coords(&self) -> Vec2 {
        Vec2::new(self[0], self[1])
    }
}

impl Coords for (i32, i32) {
    #[inline]
    fn coords(&self) -> Vec2 {
        Vec2::new(f64::from(self.0), f64::from(self.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec2_arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a + b, Vec2::new(4.0, 6.0));
        assert_eq!(b - a, Vec2::new(2.0, 2.0));
        assert_eq!(a * 3.0, Vec2::new(3.0, 6.0));
        assert_eq!(b / 2.0, Vec2::new(1.5, 2.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn distances() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(b.length(), 5.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
        assert_eq!(a.distance_squared(b), 25.0);
        assert_eq!(a.manhattan(b), 7.0);
        assert_eq!(Vec2::new(-1.0, 2.0).manhattan(Vec2::new(2.0, -2.0)), 7.0);
    }

    #[test]
    fn coords_impls_agree() {
        let v = Vec2::new(2.0, 5.0);
        assert_eq!((2.0, 5.0).coords(), v);
        assert_eq!([2.0, 5.0].coords(), v);
        assert_eq!((2, 5).coords(), v);
        assert_eq!(Vec2::from((2.0, 5.0)), v);
    }

    #[test]
    fn display() {
        assert_eq!(Vec2::new(1.5, -2.0).to_string(), "(1.5, -2)");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn vec2_round_trip() {
        let v = Vec2::new(3.25, -7.5);
        let json = serde_json::to_string(&v).unwrap();
        let back: Vec2 = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}

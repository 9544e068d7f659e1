//! Built-in heuristics for planar payloads.
//!
//! Each is available as a plain function, usable wherever a
//! [`Heuristic`] is expected, and by name through [`Builtin`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use waygraph_core::Coords;

use crate::traits::Heuristic;

/// Always 0. Turns A* into uniform-cost (Dijkstra) search.
#[inline]
pub fn zero<T: ?Sized>(_from: &T, _to: &T) -> f64 {
    0.0
}

/// Manhattan (L1) distance between two positions.
///
/// Admissible only when movement is axis-aligned. On graphs with diagonal
/// edges cheaper than the L1 distance it overestimates, and A* may return a
/// suboptimal path; that is the caller's call to make.
#[inline]
pub fn manhattan<T: Coords + ?Sized>(from: &T, to: &T) -> f64 {
    from.coords().manhattan(to.coords())
}

/// Euclidean (straight-line) distance between two positions.
///
/// Admissible whenever every edge costs at least the straight-line distance
/// between its endpoints.
#[inline]
pub fn euclidean<T: Coords + ?Sized>(from: &T, to: &T) -> f64 {
    from.coords().distance(to.coords())
}

/// The built-in heuristics, selectable by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Builtin {
    /// See [`zero`].
    #[default]
    Zero,
    /// See [`manhattan`].
    Manhattan,
    /// See [`euclidean`].
    Euclidean,
}

impl Builtin {
    /// Every built-in, in declaration order.
    pub const ALL: [Builtin; 3] = [Builtin::Zero, Builtin::Manhattan, Builtin::Euclidean];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::Manhattan => "manhattan",
            Self::Euclidean => "euclidean",
        }
    }
}

impl<T: Coords + ?Sized> Heuristic<T> for Builtin {
    fn estimate(&self, from: &T, to: &T) -> f64 {
        match self {
            Self::Zero => zero(from, to),
            Self::Manhattan => manhattan(from, to),
            Self::Euclidean => euclidean(from, to),
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A heuristic name that matches no built-in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown heuristic {0:?}, expected one of zero, manhattan, euclidean")]
pub struct UnknownHeuristic(pub String);

impl FromStr for Builtin {
    type Err = UnknownHeuristic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero" | "none" | "dijkstra" => Ok(Self::Zero),
            "manhattan" | "l1" => Ok(Self::Manhattan),
            "euclidean" | "l2" => Ok(Self::Euclidean),
            _ => Err(UnknownHeuristic(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waygraph_core::Vec2;

    #[test]
    fn builtin_values() {
        let a = Vec2::new(1.0, 1.0);
        let b = Vec2::new(4.0, 5.0);
        assert_eq!(zero(&a, &b), 0.0);
        assert_eq!(manhattan(&a, &b), 7.0);
        assert_eq!(euclidean(&a, &b), 5.0);
        // Symmetric.
        assert_eq!(manhattan(&b, &a), 7.0);
        assert_eq!(euclidean(&b, &a), 5.0);
    }

    #[test]
    fn builtin_enum_matches_functions() {
        let a = Vec2::new(-2.0, 3.0);
        let b = Vec2::new(6.0, -3.0);
        assert_eq!(Builtin::Zero.estimate(&a, &b), 0.0);
        assert_eq!(Builtin::Manhattan.estimate(&a, &b), 14.0);
        assert_eq!(Builtin::Euclidean.estimate(&a, &b), 10.0);
    }

    #[test]
    fn works_on_other_payloads() {
        assert_eq!(Builtin::Manhattan.estimate(&(0i32, 0i32), &(3i32, -4i32)), 7.0);
        assert_eq!(Builtin::Euclidean.estimate(&[0.0f64, 0.0], &[3.0f64, 4.0]), 5.0);
    }

    #[test]
    fn closures_are_heuristics() {
        let scaled = |a: &Vec2, b: &Vec2| 0.5 * a.distance(*b);
        assert_eq!(scaled.estimate(&Vec2::ZERO, &Vec2::new(0.0, 8.0)), 4.0);
    }

    #[test]
    fn names_round_trip() {
        for h in Builtin::ALL {
            assert_eq!(h.to_string().parse::<Builtin>(), Ok(h));
        }
        assert_eq!("None".parse::<Builtin>(), Ok(Builtin::Zero));
        assert_eq!(" L2 ".parse::<Builtin>(), Ok(Builtin::Euclidean));
        assert_eq!(
            "octile".parse::<Builtin>(),
            Err(UnknownHeuristic("octile".to_string()))
        );
        assert_eq!(Builtin::default(), Builtin::Zero);
    }
}

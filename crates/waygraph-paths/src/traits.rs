/// Estimate of the remaining cost between two vertex payloads.
///
/// A* returns optimal paths only when the estimate is consistent: for every
/// edge `u -> v` of weight `w`, `estimate(u) <= w + estimate(v)`, with the
/// goal estimating 0. Consistency implies admissibility (never
/// overestimating). Admissible but inconsistent estimates may yield
/// suboptimal paths because settled vertices are not reopened. The engine
/// does not check either property.
pub trait Heuristic<T: ?Sized> {
    /// Estimated cost from `from` to `to`. Must be non-negative.
    fn estimate(&self, from: &T, to: &T) -> f64;
}

impl<T: ?Sized, F> Heuristic<T> for F
where
    F: Fn(&T, &T) -> f64,
{
    #[inline]
    fn estimate(&self, from: &T, to: &T) -> f64 {
        self(from, to)
    }
}

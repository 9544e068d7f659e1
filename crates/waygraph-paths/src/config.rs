//! Search configuration.

/// Options shared by every search a [`PathSearch`](crate::PathSearch) runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Give up after settling this many vertices. `None` searches until the
    /// goal is found or the frontier runs dry.
    pub max_expanded: Option<usize>,
}

impl SearchConfig {
    /// Unbounded search.
    pub const fn new() -> Self {
        Self { max_expanded: None }
    }

    /// Cap the number of vertices a search may expand.
    pub const fn with_max_expanded(mut self, limit: usize) -> Self {
        self.max_expanded = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder() {
        assert_eq!(SearchConfig::new(), SearchConfig::default());
        assert_eq!(SearchConfig::new().max_expanded, None);
        assert_eq!(SearchConfig::new().with_max_expanded(50).max_expanded, Some(50));
    }
}

//! Run configuration

/// How much structure to check before counting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validation {
    /// Require exactly N-1 edges forming one tree rooted at node 1
    #[default]
    Strict,

    /// Only check node labels; unreachable nodes are ignored
    Trusting,
}

/// Parameters for [`count_removable_edges`](crate::count_removable_edges)
#[derive(Debug, Clone, Default)]
pub struct CounterConfig {
    /// Structural checks applied when building the tree
    pub validation: Validation,
}

impl CounterConfig {
    /// Skip structural checks, accepting any edge list with in-range labels
    pub fn trusting() -> Self {
        Self {
            validation: Validation::Trusting,
        }
    }
}

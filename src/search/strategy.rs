//! Search strategies
//!
//! All three strategies share one frontier-based engine; a strategy is just
//! the rule that turns (path cost, heuristic estimate) into a frontier
//! priority.

use std::fmt;

/// Frontier ordering rule for the path search engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Expand by cumulative path cost only. Every edge costs 1, so the first
    /// path popped at the goal is a true shortest path.
    UniformCost,
    /// Expand by heuristic estimate only. Fast to commit, but the rank
    /// distance can lure it down longer routes; the frontier still backtracks,
    /// so a path is found whenever one exists.
    Greedy,
    /// Expand by cost + estimate. The rank-distance heuristic is not
    /// admissible, so this is heuristic-guided search without an optimality
    /// guarantee.
    AStar,
}

impl Strategy {
    /// Create strategy from name string
    ///
    /// Supported names: "uniform", "ucs", "greedy", "astar", "a-star".
    /// Defaults to A* if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "uniform" | "ucs" => Self::UniformCost,
            "greedy" => Self::Greedy,
            _ => Self::AStar,
        }
    }

    /// All strategies, in comparison-report order
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::UniformCost, Self::AStar, Self::Greedy]
    }

    /// Short display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::UniformCost => "uniform-cost",
            Self::Greedy => "greedy",
            Self::AStar => "a-star",
        }
    }

    /// Frontier priority for a node with the given path cost and estimate
    #[inline]
    #[must_use]
    pub(crate) const fn priority(self, cost: u32, estimate: u32) -> u32 {
        match self {
            Self::UniformCost => cost,
            Self::Greedy => estimate,
            Self::AStar => cost + estimate,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_recognizes_aliases() {
        assert_eq!(Strategy::from_name("uniform"), Strategy::UniformCost);
        assert_eq!(Strategy::from_name("ucs"), Strategy::UniformCost);
        assert_eq!(Strategy::from_name("greedy"), Strategy::Greedy);
        assert_eq!(Strategy::from_name("astar"), Strategy::AStar);
    }

    #[test]
    fn from_name_defaults_to_astar() {
        assert_eq!(Strategy::from_name("dijkstra"), Strategy::AStar);
        assert_eq!(Strategy::from_name(""), Strategy::AStar);
    }

    #[test]
    fn priority_uses_the_right_terms() {
        assert_eq!(Strategy::UniformCost.priority(3, 99), 3);
        assert_eq!(Strategy::Greedy.priority(3, 99), 99);
        assert_eq!(Strategy::AStar.priority(3, 99), 102);
    }

    #[test]
    fn display_names() {
        assert_eq!(Strategy::UniformCost.to_string(), "uniform-cost");
        assert_eq!(Strategy::Greedy.to_string(), "greedy");
        assert_eq!(Strategy::AStar.to_string(), "a-star");
    }
}

use std::hash::Hash;

use crate::error::Result;

/// Stable integer identifier for a graph node.
pub type NodeId = i64;

/// A domain value that can participate in a route search.
///
/// `matches_target` is deliberately distinct from `Eq`: it permits fuzzy or
/// partial target matching, e.g. "any node with these coordinates regardless
/// of other state". The default implementation falls back to full equality.
pub trait GraphNode: Clone + Eq + Hash {
    /// Stable identifier for this node.
    fn id(&self) -> NodeId;

    /// Whether this node qualifies as the search target `other`.
    fn matches_target(&self, other: &Self) -> bool {
        self == other
    }
}

/// Minimal lookup/enumeration contract the search engine consumes.
///
/// Edge enumeration may be computed lazily; nothing here requires the caller
/// to materialise adjacency up front. Edges are directed by construction of
/// `edges`; no symmetry is assumed.
pub trait Graph {
    type Node: GraphNode;

    /// Resolve an identifier to its node, failing with
    /// [`Error::NodeNotFound`](crate::Error::NodeNotFound) when absent.
    fn lookup(&self, id: NodeId) -> Result<Self::Node>;

    /// Enumerate the nodes reachable from `node` in one step.
    fn edges(&self, node: &Self::Node) -> Vec<Self::Node>;
}

/// Pure cost function over a pair of nodes.
///
/// Used both as an edge-cost function (actual cost of stepping to an adjacent
/// node) and as a heuristic (estimated remaining cost to the target). A
/// heuristic must be admissible (never overestimate the true remaining
/// cost) for the best-first finder to guarantee optimality.
pub trait Scorer<N> {
    fn cost(&self, from: &N, to: &N) -> i64;
}

impl<N, F> Scorer<N> for F
where
    F: Fn(&N, &N) -> i64,
{
    fn cost(&self, from: &N, to: &N) -> i64 {
        self(from, to)
    }
}

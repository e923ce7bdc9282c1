//! Route-search strategies.
//!
//! Four strategies share the same building blocks: the per-invocation
//! node map of [`RouteNode`] bookkeeping, the [`SkewHeap`] open set, and the
//! three-way [`RouteDecision`] hook.
//!
//! - [`search_best_first`] / [`find_route`] - A*-style best-first search
//!   guided by an optional admissible heuristic.
//! - [`distances_from`] - single-source Dijkstra distance map, no target.
//! - [`search_exhaustive`] / [`enumerate_routes`] - explicit-stack
//!   depth-first route enumeration.
//! - [`best_route_by`] - exhaustive search keeping the best route under a
//!   caller-supplied comparison, where finding nothing is a hard failure.
//!
//! Every invocation is synchronous and self-contained: the node map and open
//! set live and die inside one call.
//!
//! [`RouteNode`]: crate::route::RouteNode
//! [`RouteDecision`]: crate::route::RouteDecision
//! [`SkewHeap`]: crate::heap::SkewHeap

mod best_first;
mod dijkstra;
mod exhaustive;

pub use best_first::{find_route, search_best_first};
pub use dijkstra::distances_from;
pub use exhaustive::{best_route_by, enumerate_routes, search_exhaustive};

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::graph::{GraphNode, NodeId, Scorer};
use crate::route::{Route, RouteNode};

/// Supported search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SearchAlgorithm {
    /// Best-first search (A* when given a heuristic).
    #[default]
    #[serde(rename = "best-first")]
    BestFirst,
    /// Dijkstra single-source distance map.
    Dijkstra,
    /// Exhaustive depth-first route enumeration.
    Exhaustive,
    /// Exhaustive search under a caller-supplied comparison.
    #[serde(rename = "best-by-criterion")]
    BestByCriterion,
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SearchAlgorithm::BestFirst => "best-first",
            SearchAlgorithm::Dijkstra => "dijkstra",
            SearchAlgorithm::Exhaustive => "exhaustive",
            SearchAlgorithm::BestByCriterion => "best-by-criterion",
        };
        f.write_str(value)
    }
}

/// Heuristic contribution for a node; an absent scorer contributes zero,
/// which degrades best-first ordering to plain Dijkstra ordering.
fn heuristic_cost<N>(heuristic: Option<&dyn Scorer<N>>, from: &N, to: &N) -> i64 {
    heuristic.map_or(0, |scorer| scorer.cost(from, to))
}

/// Walk back-pointers from `tail` to a start node, then reverse into
/// start-to-target order.
fn reconstruct<N: GraphNode>(
    nodes: &HashMap<NodeId, RouteNode<N>>,
    tail: NodeId,
    total_cost: i64,
) -> Route<N> {
    let mut path = Vec::new();
    let mut current = nodes.get(&tail);
    while let Some(route_node) = current {
        path.push(route_node.node.clone());
        current = route_node.previous.and_then(|id| nodes.get(&id));
    }
    path.reverse();
    Route {
        nodes: path,
        total_cost,
    }
}

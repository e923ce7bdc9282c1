use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::graph::{GraphNode, NodeId};
use crate::heap::EntryHandle;

/// Per-search bookkeeping wrapped around one graph node.
///
/// One record type with optional fields replaces what could otherwise be a
/// small hierarchy (plain / with-estimate / with-open-set-handle). A
/// `RouteNode` is created lazily on first encounter, owned exclusively by one
/// search invocation's node map, mutated whenever a cheaper path is found,
/// and never deleted.
///
/// `previous` is an index-based back-pointer: it stores the identifier of the
/// node this one was reached from on the best-known path and is resolved
/// through the node map. It may be rewritten mid-search when a shorter path
/// is discovered.
///
/// `visited` is kept separate from `previous` on purpose: the depth-first
/// strategies mark and unmark nodes along the current path, and conflating
/// that with back-pointer bookkeeping invites subtle bugs when both strategy
/// families share this type.
#[derive(Debug, Clone)]
pub struct RouteNode<N> {
    /// The wrapped graph node.
    pub node: N,
    /// Best known cost from a start node. Only ever decreases during a
    /// best-first search.
    pub route_score: i64,
    /// `route_score` plus the heuristic estimate to the target; re-derived
    /// whenever `route_score` changes. Equals `route_score` when no
    /// heuristic is in play.
    pub estimated_score: i64,
    /// Identifier of the previous node on the best-known path, if any.
    pub previous: Option<NodeId>,
    /// Open-set membership: present while the node awaits extraction, absent
    /// once closed or not yet enqueued. Lets callers answer "is this node
    /// still open?" in O(1).
    pub handle: Option<EntryHandle>,
    /// Current-path marker used by the depth-first strategies; cleared on
    /// backtrack so other branches may revisit the node.
    pub visited: bool,
}

impl<N: GraphNode> RouteNode<N> {
    /// Wrap a start node: zero cost, no predecessor.
    pub fn start(node: N) -> Self {
        Self {
            node,
            route_score: 0,
            estimated_score: 0,
            previous: None,
            handle: None,
            visited: false,
        }
    }

    /// Wrap a node first reached via `previous` at the given scores.
    pub fn reached(node: N, route_score: i64, estimated_score: i64, previous: NodeId) -> Self {
        Self {
            node,
            route_score,
            estimated_score,
            previous: Some(previous),
            handle: None,
            visited: false,
        }
    }

    /// Whether the node is still in the open set.
    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }
}

// Identity delegates to the wrapped node, never to the score fields.
impl<N: GraphNode> PartialEq for RouteNode<N> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<N: GraphNode> Eq for RouteNode<N> {}

impl<N: GraphNode> Hash for RouteNode<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node.hash(state);
    }
}

/// A finished route: the ordered node sequence from a start node to the
/// accepted target, plus its accumulated edge cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route<N> {
    pub nodes: Vec<N>,
    pub total_cost: i64,
}

impl<N> Route<N> {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// What a search should do with a candidate route it just found.
///
/// Returned by the caller-supplied decision hook shared by every strategy, in
/// place of per-strategy subclassing. `Stop` accepts the candidate and
/// terminates; `Ignore` discards it and keeps searching (used to force
/// exhaustive enumeration); `Record` keeps it as best-so-far and keeps
/// searching (used by the best-under-criterion strategy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteDecision {
    Stop,
    Ignore,
    Record,
}

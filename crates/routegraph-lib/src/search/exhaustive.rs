use std::cmp::Ordering;
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::graph::{Graph, GraphNode, NodeId, Scorer};
use crate::route::{Route, RouteDecision, RouteNode};

use super::{reconstruct, SearchAlgorithm};

/// One step of the explicit depth-first stack: a committed node and the
/// neighbours not yet explored from it.
struct Frame<N> {
    id: NodeId,
    pending: Vec<N>,
}

/// Enumerate every route from `start` to nodes matching `target`, invoking
/// `visit` for each one found. Returns how many routes were offered.
///
/// Routes are explored under the `Ignore` policy, so the search never halts
/// early and visits every route the graph admits.
pub fn enumerate_routes<G, F>(
    graph: &G,
    start: &G::Node,
    target: &G::Node,
    edge_cost: &dyn Scorer<G::Node>,
    mut visit: F,
) -> usize
where
    G: Graph,
    F: FnMut(&Route<G::Node>),
{
    let mut seen = 0usize;
    let _ = search_exhaustive(
        graph,
        std::slice::from_ref(start),
        target,
        edge_cost,
        None,
        |route, _| {
            seen += 1;
            visit(route);
            RouteDecision::Ignore
        },
    );
    seen
}

/// Find the best route under a caller comparison, exploring exhaustively.
///
/// `is_better(candidate, incumbent)` decides whether a newly found route
/// displaces the best one recorded so far, e.g. comparing on higher total
/// cost to maximise instead of minimise. Unlike the other finders, coming up
/// empty here is a hard failure ([`Error::NoRouteFound`]): callers of this
/// strategy assert that a route exists.
pub fn best_route_by<G, F>(
    graph: &G,
    starts: &[G::Node],
    target: &G::Node,
    edge_cost: &dyn Scorer<G::Node>,
    order: Option<&dyn Fn(&G::Node, &G::Node) -> Ordering>,
    mut is_better: F,
) -> Result<Route<G::Node>>
where
    G: Graph,
    F: FnMut(&Route<G::Node>, &Route<G::Node>) -> bool,
{
    search_exhaustive(graph, starts, target, edge_cost, order, |candidate, incumbent| {
        match incumbent {
            Some(best) if !is_better(candidate, best) => RouteDecision::Ignore,
            _ => RouteDecision::Record,
        }
    })
    .ok_or_else(|| {
        tracing::warn!(
            "{} search found no route",
            SearchAlgorithm::BestByCriterion
        );
        Error::NoRouteFound
    })
}

/// Depth-first route search over an explicit stack of frames.
///
/// Each frame pairs a committed node with its remaining unexplored
/// neighbours, pre-filtered of anything already on the current path and
/// sorted by `order` (ascending node id when `None`) for deterministic
/// traversal. When a frame runs out of neighbours the node is backtracked:
/// its current-path marker and back-pointer are cleared so later branches
/// may pass through it again, and the frame is popped. The explicit stack
/// keeps deep graphs from growing the call stack.
///
/// Candidates are offered to `decide` exactly as in the best-first finder;
/// the default policy for plain enumeration is `Ignore`. Returns the best
/// recorded route, or `None` when no candidate was accepted.
pub fn search_exhaustive<G, D>(
    graph: &G,
    starts: &[G::Node],
    target: &G::Node,
    edge_cost: &dyn Scorer<G::Node>,
    order: Option<&dyn Fn(&G::Node, &G::Node) -> Ordering>,
    mut decide: D,
) -> Option<Route<G::Node>>
where
    G: Graph,
    D: FnMut(&Route<G::Node>, Option<&Route<G::Node>>) -> RouteDecision,
{
    let mut best: Option<Route<G::Node>> = None;
    let mut offered = 0usize;

    for start in starts {
        let mut nodes: HashMap<NodeId, RouteNode<G::Node>> = HashMap::new();
        let mut seed = RouteNode::start(start.clone());
        seed.visited = true;
        nodes.insert(start.id(), seed);

        if start.matches_target(target) {
            let candidate = reconstruct(&nodes, start.id(), 0);
            offered += 1;
            match decide(&candidate, best.as_ref()) {
                RouteDecision::Stop => return Some(candidate),
                RouteDecision::Ignore => {}
                RouteDecision::Record => best = Some(candidate),
            }
        }

        let mut stack = vec![Frame {
            id: start.id(),
            pending: pending_edges(graph, &nodes, start, order),
        }];

        while let Some(top) = stack.last_mut() {
            let frame_id = top.id;
            let Some(neighbor) = top.pending.pop() else {
                // Exhausted: unmark so other branches may revisit, then
                // backtrack.
                stack.pop();
                if let Some(route_node) = nodes.get_mut(&frame_id) {
                    route_node.visited = false;
                    route_node.previous = None;
                }
                continue;
            };

            let parent = &nodes[&frame_id];
            let step = edge_cost.cost(&parent.node, &neighbor);
            let score = parent.route_score + step;
            let neighbor_id = neighbor.id();

            let route_node = nodes
                .entry(neighbor_id)
                .or_insert_with(|| RouteNode::start(neighbor.clone()));
            route_node.route_score = score;
            route_node.estimated_score = score;
            route_node.previous = Some(frame_id);
            route_node.visited = true;

            if neighbor.matches_target(target) {
                let candidate = reconstruct(&nodes, neighbor_id, score);
                offered += 1;
                match decide(&candidate, best.as_ref()) {
                    RouteDecision::Stop => return Some(candidate),
                    RouteDecision::Ignore => {}
                    RouteDecision::Record => best = Some(candidate),
                }
            }

            let pending = pending_edges(graph, &nodes, &neighbor, order);
            stack.push(Frame {
                id: neighbor_id,
                pending,
            });
        }
    }

    tracing::debug!(
        "{} search offered {} candidate route(s)",
        SearchAlgorithm::Exhaustive,
        offered
    );
    best
}

/// Neighbours of `node` still eligible on the current path, sorted for
/// deterministic traversal and reversed so `pop` yields them in order.
fn pending_edges<G: Graph>(
    graph: &G,
    nodes: &HashMap<NodeId, RouteNode<G::Node>>,
    node: &G::Node,
    order: Option<&dyn Fn(&G::Node, &G::Node) -> Ordering>,
) -> Vec<G::Node> {
    let mut pending: Vec<G::Node> = graph
        .edges(node)
        .into_iter()
        .filter(|candidate| {
            nodes
                .get(&candidate.id())
                .map_or(true, |route_node| !route_node.visited)
        })
        .collect();
    match order {
        Some(compare) => pending.sort_by(|a, b| compare(a, b)),
        None => pending.sort_by_key(GraphNode::id),
    }
    pending.reverse();
    pending
}

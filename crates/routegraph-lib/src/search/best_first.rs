use std::collections::hash_map::Entry as MapEntry;
use std::collections::HashMap;

use crate::graph::{Graph, GraphNode, NodeId, Scorer};
use crate::heap::{PriorityQueue, SkewHeap};
use crate::route::{Route, RouteDecision, RouteNode};

use super::{heuristic_cost, reconstruct, SearchAlgorithm};

/// Find the cheapest route from `start` to a node matching `target`.
///
/// Standard A* behaviour: the first candidate is accepted immediately, which
/// is optimal because the open set is ordered by estimated score and the
/// heuristic is admissible. Pass `None` for the heuristic to run with plain
/// Dijkstra ordering. `None` means no route exists; that is a normal
/// outcome, not an error.
pub fn find_route<G: Graph>(
    graph: &G,
    start: &G::Node,
    target: &G::Node,
    edge_cost: &dyn Scorer<G::Node>,
    heuristic: Option<&dyn Scorer<G::Node>>,
) -> Option<Route<G::Node>> {
    search_best_first(
        graph,
        std::slice::from_ref(start),
        target,
        edge_cost,
        heuristic,
        |_, _| RouteDecision::Stop,
    )
}

/// Best-first search over `graph` from any number of start nodes.
///
/// Every start is seeded into the open set before the loop begins (route
/// score 0, estimate from the heuristic), so the returned route begins at
/// whichever start yielded the best result. Each extraction that matches the
/// target is offered to `decide` together with the best route recorded so
/// far; the hook's [`RouteDecision`] controls whether the search stops,
/// discards the candidate, or records it and keeps going.
///
/// Relaxation follows the decrease-key discipline: when a strictly cheaper
/// path to a known node is found, its bookkeeping is rewritten and its open
/// set key is lowered in place if the node is still open, or the node is
/// reinserted if it had already been closed.
pub fn search_best_first<G, D>(
    graph: &G,
    starts: &[G::Node],
    target: &G::Node,
    edge_cost: &dyn Scorer<G::Node>,
    heuristic: Option<&dyn Scorer<G::Node>>,
    mut decide: D,
) -> Option<Route<G::Node>>
where
    G: Graph,
    D: FnMut(&Route<G::Node>, Option<&Route<G::Node>>) -> RouteDecision,
{
    let mut nodes: HashMap<NodeId, RouteNode<G::Node>> = HashMap::new();
    let mut open: SkewHeap<NodeId> = SkewHeap::new();
    let mut best: Option<Route<G::Node>> = None;

    for start in starts {
        let estimate = heuristic_cost(heuristic, start, target);
        let mut route_node = RouteNode::start(start.clone());
        route_node.estimated_score = estimate;
        route_node.handle = Some(open.insert(estimate, start.id()));
        nodes.insert(start.id(), route_node);
    }
    tracing::debug!(
        "{} search seeded with {} start node(s)",
        SearchAlgorithm::BestFirst,
        starts.len()
    );

    while let Ok((_, current_id)) = open.extract_min() {
        let (current, current_score) = {
            let Some(route_node) = nodes.get_mut(&current_id) else {
                continue;
            };
            route_node.handle = None;
            (route_node.node.clone(), route_node.route_score)
        };

        if current.matches_target(target) {
            let candidate = reconstruct(&nodes, current_id, current_score);
            match decide(&candidate, best.as_ref()) {
                RouteDecision::Stop => return Some(candidate),
                RouteDecision::Ignore => continue,
                RouteDecision::Record => {
                    best = Some(candidate);
                    continue;
                }
            }
        }

        for neighbor in graph.edges(&current) {
            let tentative = current_score + edge_cost.cost(&current, &neighbor);
            let estimate = tentative + heuristic_cost(heuristic, &neighbor, target);

            match nodes.entry(neighbor.id()) {
                MapEntry::Occupied(mut occupied) => {
                    let route_node = occupied.get_mut();
                    if tentative >= route_node.route_score {
                        continue;
                    }
                    route_node.route_score = tentative;
                    route_node.estimated_score = estimate;
                    route_node.previous = Some(current_id);
                    match route_node.handle {
                        Some(handle) => {
                            // The stored key and the new one share the same
                            // heuristic term, so a strictly lower route score
                            // yields a strictly lower key.
                            let relaxed = open.decrease_key(&handle, estimate);
                            debug_assert!(relaxed.is_ok(), "relaxation lowers open-set keys");
                        }
                        None => {
                            route_node.handle = Some(open.insert(estimate, route_node.node.id()));
                        }
                    }
                }
                MapEntry::Vacant(vacant) => {
                    let id = neighbor.id();
                    let mut route_node =
                        RouteNode::reached(neighbor, tentative, estimate, current_id);
                    route_node.handle = Some(open.insert(estimate, id));
                    vacant.insert(route_node);
                }
            }
        }
    }

    best
}

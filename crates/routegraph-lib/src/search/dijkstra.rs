use std::collections::hash_map::Entry as MapEntry;
use std::collections::HashMap;

use crate::graph::{Graph, GraphNode, NodeId, Scorer};
use crate::heap::{PriorityQueue, SkewHeap};
use crate::route::RouteNode;

use super::SearchAlgorithm;

/// Compute the minimal accumulated cost from `start` to every reachable
/// node.
///
/// Same open-set mechanics as the best-first finder, but ordered by route
/// score alone: no target, no heuristic, no path reconstruction. Each
/// extraction finalises that node's distance; the search runs until the open
/// set is exhausted. A node absent from the result was unreachable from
/// `start`.
pub fn distances_from<G: Graph>(
    graph: &G,
    start: &G::Node,
    edge_cost: &dyn Scorer<G::Node>,
) -> HashMap<NodeId, i64> {
    let mut nodes: HashMap<NodeId, RouteNode<G::Node>> = HashMap::new();
    let mut open: SkewHeap<NodeId> = SkewHeap::new();
    let mut distances: HashMap<NodeId, i64> = HashMap::new();

    let mut seed = RouteNode::start(start.clone());
    seed.handle = Some(open.insert(0, start.id()));
    nodes.insert(start.id(), seed);

    while let Ok((distance, current_id)) = open.extract_min() {
        let current = {
            let Some(route_node) = nodes.get_mut(&current_id) else {
                continue;
            };
            route_node.handle = None;
            route_node.node.clone()
        };
        distances.insert(current_id, distance);

        for neighbor in graph.edges(&current) {
            let tentative = distance + edge_cost.cost(&current, &neighbor);

            match nodes.entry(neighbor.id()) {
                MapEntry::Occupied(mut occupied) => {
                    let route_node = occupied.get_mut();
                    if tentative >= route_node.route_score {
                        continue;
                    }
                    route_node.route_score = tentative;
                    route_node.estimated_score = tentative;
                    route_node.previous = Some(current_id);
                    match route_node.handle {
                        Some(handle) => {
                            // Guarded by the strictly-cheaper check above.
                            let relaxed = open.decrease_key(&handle, tentative);
                            debug_assert!(relaxed.is_ok(), "relaxation lowers open-set keys");
                        }
                        None => {
                            route_node.handle = Some(open.insert(tentative, route_node.node.id()));
                        }
                    }
                }
                MapEntry::Vacant(vacant) => {
                    let id = neighbor.id();
                    let mut route_node =
                        RouteNode::reached(neighbor, tentative, tentative, current_id);
                    route_node.handle = Some(open.insert(tentative, id));
                    vacant.insert(route_node);
                }
            }
        }
    }

    tracing::debug!(
        "{} finalised {} node(s)",
        SearchAlgorithm::Dijkstra,
        distances.len()
    );
    distances
}

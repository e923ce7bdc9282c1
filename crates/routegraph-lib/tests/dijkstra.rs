mod common;

use common::AdjacencyGraph;
use routegraph_lib::{distances_from, find_route};

#[test]
fn distances_cover_every_reachable_node() {
    let graph = AdjacencyGraph::from_edges(&[
        (1, 2, 4),
        (1, 3, 1),
        (3, 2, 2),
        (2, 4, 5),
        (3, 4, 8),
        (4, 5, 1),
    ]);
    let cost = graph.cost_fn();
    let distances = distances_from(&graph, &graph.node(1), &cost);

    assert_eq!(distances[&1], 0);
    assert_eq!(distances[&2], 3); // via 3
    assert_eq!(distances[&3], 1);
    assert_eq!(distances[&4], 8); // via 3 then 2
    assert_eq!(distances[&5], 9);
    assert_eq!(distances.len(), 5);
}

#[test]
fn unreachable_nodes_are_absent_from_the_result() {
    let graph = AdjacencyGraph::from_edges(&[(1, 2, 1), (3, 4, 1)]);
    let cost = graph.cost_fn();
    let distances = distances_from(&graph, &graph.node(1), &cost);

    assert_eq!(distances.len(), 2);
    assert!(distances.contains_key(&1));
    assert!(distances.contains_key(&2));
    assert!(!distances.contains_key(&3));
    assert!(!distances.contains_key(&4));
}

#[test]
fn edges_are_directed() {
    let graph = AdjacencyGraph::from_edges(&[(2, 1, 1)]);
    let cost = graph.cost_fn();
    let distances = distances_from(&graph, &graph.node(1), &cost);
    // Only the start itself: the single edge points the other way.
    assert_eq!(distances.len(), 1);
    assert_eq!(distances[&1], 0);
}

#[test]
fn relaxation_scores_the_traversed_edge() {
    // The scorer depends on both endpoints, so collapsing either side of the
    // pair would produce visibly wrong distances.
    let graph = AdjacencyGraph::from_edges(&[(1, 5, 0), (5, 8, 0)]);
    let span = |from: &common::Waypoint, to: &common::Waypoint| to.id - from.id;
    let distances = distances_from(&graph, &graph.node(1), &span);

    assert_eq!(distances[&1], 0);
    assert_eq!(distances[&5], 4);
    assert_eq!(distances[&8], 7);
}

#[test]
fn best_first_cost_matches_dijkstra_for_every_target() {
    let graph = AdjacencyGraph::from_edges(&[
        (1, 2, 7),
        (1, 3, 9),
        (1, 6, 14),
        (2, 3, 10),
        (2, 4, 15),
        (3, 4, 11),
        (3, 6, 2),
        (6, 5, 9),
        (4, 5, 6),
    ]);
    let cost = graph.cost_fn();
    let distances = distances_from(&graph, &graph.node(1), &cost);

    for (&target, &expected) in &distances {
        let route = find_route(&graph, &graph.node(1), &graph.node(target), &cost, None)
            .expect("dijkstra proved reachability");
        assert_eq!(route.total_cost, expected, "target {target}");
        assert_eq!(route.nodes.first().map(|n| n.id), Some(1));
        assert!(!route.nodes.is_empty());
    }
}

#[test]
fn repeated_runs_yield_identical_maps() {
    let graph = AdjacencyGraph::from_edges(&[(1, 2, 2), (2, 3, 2), (1, 3, 5)]);
    let cost = graph.cost_fn();
    let first = distances_from(&graph, &graph.node(1), &cost);
    let second = distances_from(&graph, &graph.node(1), &cost);
    assert_eq!(first, second);
}

//! Shared fixture graph for integration tests.
//!
//! `AdjacencyGraph` is a small directed graph with explicit per-edge costs,
//! implementing the `Graph` contract the search engine consumes. Edges are
//! one-way; add both directions for an undirected fixture.

use std::collections::HashMap;

use routegraph_lib::{Error, Graph, GraphNode, NodeId, Result};
use serde::Serialize;

/// Minimal node carrying nothing but its identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Waypoint {
    pub id: NodeId,
}

impl Waypoint {
    pub fn new(id: NodeId) -> Self {
        Self { id }
    }
}

impl GraphNode for Waypoint {
    fn id(&self) -> NodeId {
        self.id
    }
}

/// Directed test graph with explicit edge costs.
#[derive(Debug, Default)]
pub struct AdjacencyGraph {
    nodes: HashMap<NodeId, Waypoint>,
    edges: HashMap<NodeId, Vec<NodeId>>,
    costs: HashMap<(NodeId, NodeId), i64>,
}

#[allow(dead_code)]
impl AdjacencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(from, to, cost)` triples.
    pub fn from_edges(edges: &[(NodeId, NodeId, i64)]) -> Self {
        let mut graph = Self::new();
        for &(from, to, cost) in edges {
            graph.add_edge(from, to, cost);
        }
        graph
    }

    pub fn add_node(&mut self, id: NodeId) {
        self.nodes.entry(id).or_insert_with(|| Waypoint::new(id));
    }

    pub fn add_edge(&mut self, from: NodeId, to: NodeId, cost: i64) {
        self.add_node(from);
        self.add_node(to);
        self.edges.entry(from).or_default().push(to);
        self.costs.insert((from, to), cost);
    }

    pub fn node(&self, id: NodeId) -> Waypoint {
        Waypoint::new(id)
    }

    /// Edge-cost closure backed by the stored cost table.
    pub fn cost_fn(&self) -> impl Fn(&Waypoint, &Waypoint) -> i64 + '_ {
        move |from: &Waypoint, to: &Waypoint| *self.costs.get(&(from.id, to.id)).unwrap_or(&1)
    }
}

impl Graph for AdjacencyGraph {
    type Node = Waypoint;

    fn lookup(&self, id: NodeId) -> Result<Waypoint> {
        self.nodes
            .get(&id)
            .cloned()
            .ok_or(Error::NodeNotFound { id })
    }

    fn edges(&self, node: &Waypoint) -> Vec<Waypoint> {
        self.edges
            .get(&node.id)
            .map(|targets| targets.iter().map(|&id| Waypoint::new(id)).collect())
            .unwrap_or_default()
    }
}

/// Extract the node ids from a route for compact assertions.
#[allow(dead_code)]
pub fn route_ids(route: &routegraph_lib::Route<Waypoint>) -> Vec<NodeId> {
    route.nodes.iter().map(|node| node.id).collect()
}

//! Routegraph library entry points.
//!
//! This crate is a generic graph route-search engine: a family of
//! interchangeable search strategies (best-first/A*, single-source Dijkstra,
//! exhaustive depth-first enumeration, best-route-under-criterion) over an
//! abstract, lazily-enumerated graph, backed by a mergeable priority
//! structure with decrease-key. Callers supply the graph, the scorers, and
//! the strategy; input acquisition, problem framing, and result presentation
//! all live outside this crate.
//!

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod heap;
pub mod route;
pub mod search;

pub use error::{Error, Result};
pub use graph::{Graph, GraphNode, NodeId, Scorer};
pub use heap::{BinaryQueue, EntryHandle, PriorityQueue, SkewHeap};
pub use route::{Route, RouteDecision, RouteNode};
pub use search::{
    best_route_by, distances_from, enumerate_routes, find_route, search_best_first,
    search_exhaustive, SearchAlgorithm,
};

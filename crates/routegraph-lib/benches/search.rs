use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use routegraph_lib::{
    distances_from, find_route, BinaryQueue, Graph, GraphNode, NodeId, PriorityQueue, Result,
    SearchAlgorithm, SkewHeap,
};
use std::hint::black_box;

const SIDE: i64 = 64;

/// Grid graph with lazily computed edges: each cell steps right and down.
#[derive(Debug, Clone, Copy)]
struct GridGraph {
    side: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Cell {
    id: NodeId,
}

impl Cell {
    fn at(side: i64, row: i64, col: i64) -> Self {
        Self {
            id: row * side + col,
        }
    }

    fn row(&self, side: i64) -> i64 {
        self.id / side
    }

    fn col(&self, side: i64) -> i64 {
        self.id % side
    }
}

impl GraphNode for Cell {
    fn id(&self) -> NodeId {
        self.id
    }
}

impl Graph for GridGraph {
    type Node = Cell;

    fn lookup(&self, id: NodeId) -> Result<Cell> {
        if id >= 0 && id < self.side * self.side {
            Ok(Cell { id })
        } else {
            Err(routegraph_lib::Error::NodeNotFound { id })
        }
    }

    fn edges(&self, node: &Cell) -> Vec<Cell> {
        let (row, col) = (node.row(self.side), node.col(self.side));
        let mut out = Vec::with_capacity(2);
        if col + 1 < self.side {
            out.push(Cell::at(self.side, row, col + 1));
        }
        if row + 1 < self.side {
            out.push(Cell::at(self.side, row + 1, col));
        }
        out
    }
}

fn step_cost(side: i64) -> impl Fn(&Cell, &Cell) -> i64 {
    move |from: &Cell, _: &Cell| 1 + (from.row(side) + from.col(side)) % 3
}

fn manhattan(side: i64) -> impl Fn(&Cell, &Cell) -> i64 {
    move |from: &Cell, to: &Cell| {
        (to.row(side) - from.row(side)).abs() + (to.col(side) - from.col(side)).abs()
    }
}

static GRID: Lazy<GridGraph> = Lazy::new(|| GridGraph { side: SIDE });

fn benchmark_search(c: &mut Criterion) {
    let grid = *GRID;
    let start = Cell::at(SIDE, 0, 0);
    let goal = Cell::at(SIDE, SIDE - 1, SIDE - 1);
    let cost = step_cost(SIDE);
    let heuristic = manhattan(SIDE);

    c.bench_function(&format!("{}_grid_plain", SearchAlgorithm::BestFirst), |b| {
        b.iter(|| {
            let route = find_route(&grid, &start, &goal, &cost, None).expect("route exists");
            black_box(route.total_cost)
        });
    });

    c.bench_function(
        &format!("{}_grid_heuristic", SearchAlgorithm::BestFirst),
        |b| {
            b.iter(|| {
                let route = find_route(&grid, &start, &goal, &cost, Some(&heuristic))
                    .expect("route exists");
                black_box(route.total_cost)
            });
        },
    );

    c.bench_function(
        &format!("{}_grid_distances", SearchAlgorithm::Dijkstra),
        |b| {
            b.iter(|| {
                let distances = distances_from(&grid, &start, &cost);
                black_box(distances.len())
            });
        },
    );
}

/// The open-set workload the finders generate: a burst of inserts, a wave of
/// key decreases, then drain to empty.
fn open_set_workload<Q: PriorityQueue<u64>>(queue: &mut Q) -> i64 {
    let mut handles = Vec::with_capacity(4_096);
    let mut key: i64 = 7;
    for value in 0..4_096u64 {
        key = (key * 31 + 17) % 65_536;
        handles.push((queue.insert(key, value), key));
    }
    for (handle, current) in handles.iter().step_by(2) {
        queue
            .decrease_key(handle, current / 2)
            .expect("halving only decreases");
    }
    let mut checksum = 0;
    while let Ok((key, _)) = queue.extract_min() {
        checksum ^= key;
    }
    checksum
}

fn benchmark_open_set(c: &mut Criterion) {
    c.bench_function("open_set_skew_heap", |b| {
        b.iter(|| {
            let mut queue = SkewHeap::new();
            black_box(open_set_workload(&mut queue))
        });
    });

    c.bench_function("open_set_binary_fallback", |b| {
        b.iter(|| {
            let mut queue = BinaryQueue::new();
            black_box(open_set_workload(&mut queue))
        });
    });
}

criterion_group!(benches, benchmark_search, benchmark_open_set);
criterion_main!(benches);

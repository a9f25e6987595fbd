use super::graph::Graph;
use crate::error::GraphError;
use std::{cmp::Ordering, collections::BinaryHeap};
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DijkstraNode {
    distance: i64,
    vertex: usize,
}

impl PartialOrd for DijkstraNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DijkstraNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (BinaryHeap is max-heap by default)
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

/// Result of a single-source search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    pub source: usize,
    /// `None` for vertices the source cannot reach
    pub distances: Vec<Option<i64>>,
    pub predecessors: Vec<Option<usize>>,
    /// Heap entries that were expanded
    pub settled: usize,
    /// Times a better tentative distance was recorded
    pub relaxations: usize,
    /// Heap entries dropped because a shorter distance was already known
    pub stale_skips: usize,
}

impl ShortestPaths {
    pub fn distance_to(&self, vertex: usize) -> Option<i64> {
        self.distances.get(vertex).copied().flatten()
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance_to(vertex).is_some()
    }

    /// Vertices on a shortest path from the source to `target`, both ends
    /// included.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = Vec::new();
        let mut current_vertex = target;

        while current_vertex != self.source {
            path.push(current_vertex);
            current_vertex = self.predecessors[current_vertex]?;
        }

        path.push(self.source);
        path.reverse();
        Some(path)
    }
}

struct DijkstraState {
    heap: BinaryHeap<DijkstraNode>,
    distances: Vec<Option<i64>>,
    predecessors: Vec<Option<usize>>,
    settled: usize,
    relaxations: usize,
    stale_skips: usize,
}

impl DijkstraState {
    fn new(source: usize, vertex_count: usize) -> Self {
        let mut heap = BinaryHeap::new();
        let mut distances = vec![None; vertex_count];

        heap.push(DijkstraNode {
            distance: 0,
            vertex: source,
        });
        distances[source] = Some(0);

        Self {
            heap,
            distances,
            predecessors: vec![None; vertex_count],
            settled: 0,
            relaxations: 0,
            stale_skips: 0,
        }
    }

    fn is_stale(&self, node: &DijkstraNode) -> bool {
        self.distances[node.vertex].is_some_and(|best| node.distance > best)
    }

    fn visit_neighbor(&mut self, neighbor: usize, current: usize, weight: i64, current_distance: i64) {
        let Some(new_distance) = current_distance.checked_add(weight) else {
            return;
        };

        if let Some(existing_distance) = self.distances[neighbor] {
            if new_distance >= existing_distance {
                return;
            }
        }

        self.distances[neighbor] = Some(new_distance);
        self.predecessors[neighbor] = Some(current);
        self.relaxations += 1;
        self.heap.push(DijkstraNode {
            distance: new_distance,
            vertex: neighbor,
        });
    }

    fn into_result(self, source: usize) -> ShortestPaths {
        ShortestPaths {
            source,
            distances: self.distances,
            predecessors: self.predecessors,
            settled: self.settled,
            relaxations: self.relaxations,
            stale_skips: self.stale_skips,
        }
    }
}

impl Graph {
    /// Single-source shortest paths using a binary heap with lazy deletion:
    /// no decrease-key, outdated heap entries are skipped when popped.
    pub fn dijkstra(&self, source: usize) -> Result<ShortestPaths, GraphError> {
        self.check_vertex(source)?;

        let mut state = DijkstraState::new(source, self.vertex_count());

        while let Some(node) = state.heap.pop() {
            if state.is_stale(&node) {
                trace!(vertex = node.vertex, distance = node.distance, "skipping stale entry");
                state.stale_skips += 1;
                continue;
            }
            state.settled += 1;

            for edge in self.edges_from(node.vertex) {
                state.visit_neighbor(edge.to, node.vertex, edge.weight, node.distance);
            }
        }

        debug!(
            source,
            vertices = self.vertex_count(),
            edges = self.edge_count(),
            settled = state.settled,
            relaxations = state.relaxations,
            stale_skips = state.stale_skips,
            "dijkstra finished"
        );
        Ok(state.into_result(source))
    }
}

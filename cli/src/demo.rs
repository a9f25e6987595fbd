use algolab_core::{DistanceMatrix, Graph, GraphError, INFINITY_SENTINEL, MatrixError};
use rand::{Rng, SeedableRng, rngs::StdRng};

const INF: i64 = INFINITY_SENTINEL;

/// Source vertex used for the Dijkstra demo
pub const DIJKSTRA_SOURCE: usize = 0;

const DIJKSTRA_EDGES: [(usize, usize, i64); 10] = [
    (0, 1, 10),
    (0, 4, 5),
    (1, 2, 1),
    (1, 4, 2),
    (2, 3, 4),
    (3, 0, 7),
    (3, 2, 6),
    (4, 1, 3),
    (4, 2, 9),
    (4, 3, 2),
];

/// Produces the random lists the sorters work on.
pub struct ListGenerator {
    rng: StdRng,
    size: usize,
    max_value: i64,
}

impl ListGenerator {
    pub fn new(size: usize, max_value: i64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        Self {
            rng,
            size,
            max_value: max_value.max(1),
        }
    }

    pub fn next_list(&mut self) -> Vec<i64> {
        (0..self.size)
            .map(|_| self.rng.random_range(0..self.max_value))
            .collect()
    }
}

/// The 4-vertex matrix used by the Floyd-Warshall demo.
pub fn floyd_matrix() -> Result<DistanceMatrix, MatrixError> {
    DistanceMatrix::from_sentinel_rows(
        &[
            vec![0, 3, 6, INF],
            vec![INF, 0, 2, 1],
            vec![INF, INF, 0, 1],
            vec![INF, INF, INF, 0],
        ],
        INF,
    )
}

/// The 5-vertex graph used by the Dijkstra demo.
pub fn dijkstra_graph() -> Result<Graph, GraphError> {
    let mut graph = Graph::new(5);
    for (from, to, weight) in DIJKSTRA_EDGES {
        graph.add_edge(from, to, weight)?;
    }
    Ok(graph)
}

mod matrix;

use algolab_core::{DistanceMatrix, Graph, INFINITY_SENTINEL};

pub const INF: i64 = INFINITY_SENTINEL;

pub fn reference_matrix() -> DistanceMatrix {
    DistanceMatrix::from_sentinel_rows(
        &[
            vec![0, 3, 6, INF],
            vec![INF, 0, 2, 1],
            vec![INF, INF, 0, 1],
            vec![INF, INF, INF, 0],
        ],
        INF,
    )
    .unwrap()
}

pub fn reference_graph() -> Graph {
    let mut graph = Graph::new(5);
    for (from, to, weight) in [
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
    ] {
        graph.add_edge(from, to, weight).unwrap();
    }
    graph
}

use super::matrix::DistanceMatrix;
use crate::error::GraphError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: usize,
    pub weight: i64,
}

/// Weighted directed graph stored as adjacency lists. Edges are only ever
/// appended.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn add_edge(&mut self, from: usize, to: usize, weight: i64) -> Result<(), GraphError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if weight < 0 {
            return Err(GraphError::NegativeWeight { from, to, weight });
        }

        self.adjacency[from].push(Edge { to, weight });
        Ok(())
    }

    /// Outgoing edges in insertion order. Unknown vertices have none.
    pub fn edges_from(&self, vertex: usize) -> &[Edge] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every edge as `(from, edge)`, grouped by source vertex.
    pub fn edges(&self) -> impl Iterator<Item = (usize, Edge)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, edges)| edges.iter().map(move |&edge| (from, edge)))
    }

    /// Dense form of the graph. Parallel edges collapse to the lightest one.
    pub fn to_distance_matrix(&self) -> DistanceMatrix {
        let mut matrix = DistanceMatrix::new(self.vertex_count());
        for (from, edge) in self.edges() {
            if matrix.get(from, edge.to).is_none_or(|current| edge.weight < current) {
                matrix.set(from, edge.to, Some(edge.weight));
            }
        }
        matrix
    }

    pub(crate) fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }
}

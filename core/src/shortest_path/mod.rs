pub mod dijkstra;
pub mod floyd_warshall;
pub mod graph;
pub mod matrix;

// Re-export the public functions
pub use dijkstra::ShortestPaths;
pub use floyd_warshall::floyd_warshall;
pub use graph::{Edge, Graph};
pub use matrix::{DistanceMatrix, INFINITY_SENTINEL};

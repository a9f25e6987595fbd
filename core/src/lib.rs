pub mod algorithm;
pub mod error;
pub mod shortest_path;
pub mod sorting;

// Re-export commonly used items
pub use algorithm::Algorithm;
pub use error::{GraphError, MatrixError};
pub use shortest_path::{
    DistanceMatrix, Edge, Graph, INFINITY_SENTINEL, ShortestPaths, floyd_warshall,
};
pub use sorting::{SortStats, merge_sort, quick_sort, quick_sort_range};

use super::matrix::DistanceMatrix;
use tracing::debug;

/// All-pairs shortest paths. Returns a new matrix; the input is left untouched.
///
/// Negative cycles are not detected and give meaningless results.
pub fn floyd_warshall(matrix: &DistanceMatrix) -> DistanceMatrix {
    let mut dist = matrix.clone();
    let vertex_count = dist.size();
    let mut improvements = 0usize;

    for k in 0..vertex_count {
        for i in 0..vertex_count {
            for j in 0..vertex_count {
                if let Some(candidate) = path_through(&dist, i, k, j) {
                    if dist.get(i, j).is_none_or(|current| candidate < current) {
                        dist.set(i, j, Some(candidate));
                        improvements += 1;
                    }
                }
            }
        }
    }

    debug!(vertex_count, improvements, "floyd-warshall finished");
    dist
}

/// Length of `i -> k -> j`, if both legs exist and the sum fits in an `i64`.
fn path_through(dist: &DistanceMatrix, i: usize, k: usize, j: usize) -> Option<i64> {
    let first_leg = dist.get(i, k)?;
    let second_leg = dist.get(k, j)?;
    first_leg.checked_add(second_leg)
}

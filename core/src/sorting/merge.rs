use super::SortStats;
use tracing::debug;

/// Stable top-down MergeSort. Each level merges out of temporary copies of the
/// two halves back into `values`.
pub fn merge_sort<T: Ord + Clone>(values: &mut [T]) -> SortStats {
    let mut stats = SortStats::default();
    sort_slice(values, &mut stats);

    debug!(
        len = values.len(),
        comparisons = stats.comparisons,
        movements = stats.movements,
        "merge sort finished"
    );
    stats
}

fn sort_slice<T: Ord + Clone>(values: &mut [T], stats: &mut SortStats) {
    if values.len() <= 1 {
        return;
    }

    let mid = values.len() / 2;
    let mut left = values[..mid].to_vec();
    let mut right = values[mid..].to_vec();

    sort_slice(&mut left, stats);
    sort_slice(&mut right, stats);

    merge(values, &left, &right, stats);
}

fn merge<T: Ord + Clone>(output: &mut [T], left: &[T], right: &[T], stats: &mut SortStats) {
    let (mut l, mut r, mut k) = (0, 0, 0);

    while l < left.len() && r < right.len() {
        // ties go left to keep the sort stable
        if left[l] <= right[r] {
            output[k] = left[l].clone();
            l += 1;
        } else {
            output[k] = right[r].clone();
            r += 1;
        }
        k += 1;
        stats.comparisons += 1;
        stats.movements += 1;
    }

    for item in left[l..].iter().chain(&right[r..]) {
        output[k] = item.clone();
        k += 1;
        stats.movements += 1;
    }
}

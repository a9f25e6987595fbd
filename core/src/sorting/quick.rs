use super::SortStats;
use tracing::debug;

/// Sorts the whole slice in place using last-element-pivot QuickSort.
pub fn quick_sort<T: Ord>(values: &mut [T]) -> SortStats {
    if values.is_empty() {
        return SortStats::default();
    }
    let end = values.len() - 1;
    quick_sort_range(values, 0, end)
}

/// Sorts the inclusive range `[start, end]` in place.
///
/// Panics if `end` is out of bounds for a non-trivial range.
pub fn quick_sort_range<T: Ord>(values: &mut [T], start: usize, end: usize) -> SortStats {
    let mut stats = SortStats::default();
    sort_range(values, start, end, &mut stats);

    debug!(
        start,
        end,
        comparisons = stats.comparisons,
        movements = stats.movements,
        "quick sort finished"
    );
    stats
}

fn sort_range<T: Ord>(values: &mut [T], start: usize, end: usize, stats: &mut SortStats) {
    if end <= start {
        return;
    }

    let pivot = partition(values, start, end, stats);
    if pivot > start {
        sort_range(values, start, pivot - 1, stats);
    }
    sort_range(values, pivot + 1, end, stats);
}

/// Lomuto partition around `values[end]`, returning the pivot's final index.
fn partition<T: Ord>(values: &mut [T], start: usize, end: usize, stats: &mut SortStats) -> usize {
    // everything in start..boundary is < pivot
    let mut boundary = start;

    for j in start..end {
        if values[j] < values[end] {
            values.swap(boundary, j);
            boundary += 1;
            stats.movements += 1;
        }
        stats.comparisons += 1;
    }

    values.swap(boundary, end);
    stats.movements += 1;
    boundary
}

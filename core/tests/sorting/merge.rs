use algolab_core::{SortStats, merge_sort};
use pretty_assertions::assert_eq;
use std::cmp::Ordering;

#[test]
fn test_merge_sort_reference_input() {
    let mut values = vec![9, 7, 2, 11, 1, 39, 54];

    let stats = merge_sort(&mut values);

    assert_eq!(values, vec![1, 2, 7, 9, 11, 39, 54]);
    assert_eq!(stats, SortStats::new(11, 20));
}

#[test]
fn test_merge_sort_empty_and_single() {
    let mut empty: Vec<i64> = vec![];
    assert_eq!(merge_sort(&mut empty), SortStats::default());

    let mut single = vec![-1];
    assert_eq!(merge_sort(&mut single), SortStats::default());
    assert_eq!(single, vec![-1]);
}

#[test]
fn test_merge_sort_movements_for_power_of_two_lengths() {
    for (len, levels) in [(2usize, 1u64), (8, 3), (64, 6), (1024, 10)] {
        let mut values = crate::random_values(len as u64, len, 100);

        let stats = merge_sort(&mut values);

        assert_eq!(stats.movements, len as u64 * levels, "len {len}");
        assert!(stats.comparisons <= stats.movements);
    }
}

#[test]
fn test_merge_sort_sorted_input_needs_fewest_comparisons() {
    let mut values: Vec<i64> = (0..8).collect();

    let stats = merge_sort(&mut values);

    // each merge stops comparing once the left half runs out
    assert_eq!(stats.comparisons, 12);
    assert_eq!(stats.movements, 24);
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Tagged {
    key: i64,
    tag: usize,
}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

#[test]
fn test_merge_sort_is_stable() {
    let keys = [3, 1, 3, 2, 1, 3, 2, 1, 0, 3];
    let mut values: Vec<Tagged> = keys
        .iter()
        .enumerate()
        .map(|(tag, &key)| Tagged { key, tag })
        .collect();

    merge_sort(&mut values);

    for pair in values.windows(2) {
        assert!(pair[0].key <= pair[1].key);
        if pair[0].key == pair[1].key {
            assert!(pair[0].tag < pair[1].tag, "{pair:?} lost input order");
        }
    }
}

#[test]
fn test_merge_sort_stable_on_random_keys() {
    let keys = crate::random_values(7, 500, 10);
    let mut values: Vec<Tagged> = keys
        .iter()
        .enumerate()
        .map(|(tag, &key)| Tagged { key, tag })
        .collect();

    merge_sort(&mut values);

    let mut expected = values.clone();
    expected.sort_by_key(|item| (item.key, item.tag));
    assert_eq!(
        values.iter().map(|v| v.tag).collect::<Vec<_>>(),
        expected.iter().map(|v| v.tag).collect::<Vec<_>>()
    );
}

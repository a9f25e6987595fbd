use algolab::init_tracing;
use algolab_core::quick_sort;
use tracing::debug;

#[test]
fn test_verbose_tracing_installs_and_accepts_events() {
    init_tracing(true);

    debug!(size = 3, "sorting");
    let mut values = vec![3, 1, 2];
    quick_sort(&mut values);

    assert_eq!(values, vec![1, 2, 3]);
}

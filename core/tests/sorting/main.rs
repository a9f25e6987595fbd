mod merge;

use rand::{Rng, SeedableRng, rngs::StdRng};

pub fn random_values(seed: u64, len: usize, max_value: i64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(0..max_value)).collect()
}

pub fn is_non_decreasing<T: Ord>(values: &[T]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}

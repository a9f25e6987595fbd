pub mod merge;
pub mod quick;

use serde::{Deserialize, Serialize};

// Re-export the public functions
pub use merge::merge_sort;
pub use quick::{quick_sort, quick_sort_range};

/// Operation counters for a single sort call. Every call starts from zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortStats {
    pub comparisons: u64,
    pub movements: u64,
}

impl SortStats {
    pub fn new(comparisons: u64, movements: u64) -> Self {
        Self {
            comparisons,
            movements,
        }
    }

    pub fn total_operations(&self) -> u64 {
        self.comparisons + self.movements
    }
}

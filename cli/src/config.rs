use crate::args::Args;
use std::time::Duration;

/// Settings for a lab session, resolved from the command line
#[derive(Debug, Clone)]
pub struct LabConfig {
    /// Length of the random list given to the sorters
    pub list_size: usize,
    /// Exclusive upper bound of the random values
    pub max_value: i64,
    /// Fixed seed for reproducible lists
    pub seed: Option<u64>,
    /// Pause between progress dots
    pub delay: Duration,
    pub use_colors: bool,
    pub quiet: bool,
    pub show_timing: bool,
}

impl LabConfig {
    pub fn new(list_size: usize, max_value: i64, seed: Option<u64>) -> Self {
        Self {
            list_size,
            max_value,
            seed,
            ..Self::default()
        }
    }

    /// Settings for non-interactive use: no pauses, no colors.
    pub fn plain(list_size: usize, max_value: i64, seed: Option<u64>) -> Self {
        Self {
            delay: Duration::ZERO,
            use_colors: false,
            ..Self::new(list_size, max_value, seed)
        }
    }
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            list_size: 1000,
            max_value: 1000,
            seed: None,
            delay: Duration::from_millis(300),
            use_colors: true,
            quiet: false,
            show_timing: false,
        }
    }
}

impl From<&Args> for LabConfig {
    fn from(args: &Args) -> Self {
        Self {
            list_size: args.size,
            max_value: args.max_value,
            seed: args.seed,
            delay: Duration::from_millis(args.delay_ms),
            use_colors: !args.no_color,
            quiet: args.quiet,
            show_timing: args.verbose,
        }
    }
}

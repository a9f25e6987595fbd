use algolab_core::Algorithm;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(name = "algolab")]
#[command(about = "Run classic sorting and shortest-path algorithms and inspect their operation counts")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Number of values in the random list fed to the sorters
    #[arg(short = 'n', long, value_name = "COUNT", default_value = "1000", global = true)]
    pub size: usize,

    /// Random values are drawn from 0 up to (but not including) this bound
    #[arg(short = 'm', long, value_name = "BOUND", default_value = "1000", global = true,
          value_parser = clap::value_parser!(i64).range(1..))]
    pub max_value: i64,

    /// Seed for the random list generator (random by default)
    #[arg(long, value_name = "SEED", global = true)]
    pub seed: Option<u64>,

    /// Pause between progress dots in milliseconds, 0 to skip
    #[arg(long, value_name = "MS", default_value = "300", global = true)]
    pub delay_ms: u64,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print the result as JSON (only with `run`)
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Quiet mode - skip the unsorted input and shortest-path routes
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode - debug logs on stderr and run timings
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run one algorithm and exit instead of opening the menu
    Run {
        /// quick-sort, merge-sort, floyd-warshall or dijkstra
        #[arg(value_parser = parse_algorithm)]
        algorithm: Algorithm,
    },
}

fn parse_algorithm(value: &str) -> Result<Algorithm, String> {
    Algorithm::parse(value).ok_or_else(|| {
        let known: Vec<_> = Algorithm::ALL.iter().map(Algorithm::as_str).collect();
        format!("unknown algorithm '{}', expected one of: {}", value, known.join(", "))
    })
}

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "algolab=warn,algolab_core=warn";
const VERBOSE_FILTER: &str = "algolab=debug,algolab_core=debug";

/// Logs go to stderr so they never mix with menu output. `RUST_LOG`
/// overrides the default filter.
///
/// Panics if a global subscriber is already installed.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

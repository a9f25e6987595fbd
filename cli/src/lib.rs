pub mod app;
pub mod args;
pub mod colors;
pub mod config;
pub mod demo;
pub mod display;
pub mod json_output;
pub mod logging;
pub mod menu;
pub mod runner;
pub mod utils;

// Re-export commonly used items
pub use app::LabApp;
pub use args::{Args, Command};
pub use config::LabConfig;
pub use logging::init_tracing;
pub use menu::{MenuChoice, run_menu};
pub use runner::{RunReport, run_algorithm};
pub use utils::format_number;

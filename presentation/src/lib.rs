//! Presentation layer for stitch-invoke
//!
//! This crate contains the CLI definition, output formatting,
//! progress reporting and exit-status mapping.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use cli::exit::{EXIT_CONFIG, EXIT_USAGE, Rendered, exit_code, render, report};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::SpinnerProgress;

//! Command line surface: argument parsing and exit statuses.

pub mod commands;
pub mod exit;

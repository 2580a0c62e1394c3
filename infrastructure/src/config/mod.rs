//! Configuration file loading for stitch-invoke
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `STITCH_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./stitch.toml` or `./.stitch.toml`
//! 4. Global: `<config dir>/stitch-invoke/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{ConfigValidationError, FileAuthConfig, FileConfig, FileServiceConfig};
pub use loader::ConfigLoader;

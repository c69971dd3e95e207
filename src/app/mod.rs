//! Application Layer
//!
//! CLI, configuration and logging for the `helper` binary.

pub mod cli;
pub mod config;
pub mod logging;

pub use cli::Cli;
pub use config::Config;
pub use logging::LogFormat;

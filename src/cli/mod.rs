//! CLI module for zookeepr
//!
//! Provides command-line interface for:
//! - serve: Open the backing document and serve the HTTP API
//! - init: Create an empty backing document
//! - query: One-shot filtered listing

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{init, load_config, query_animals, resolve_config, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};

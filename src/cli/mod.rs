//! CLI module for oscarquery
//!
//! Provides command-line interface for:
//! - serve: Load the catalog and serve film queries over HTTP
//! - query: One-shot query against a catalog file

mod args;
mod commands;
mod errors;
mod io;

pub use args::{parse_param, Cli, Command};
pub use commands::{query, run, run_command, serve, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_response;

//! CLI argument definitions using clap
//!
//! Commands:
//! - oscarquery serve --config <path>
//! - oscarquery query --catalog <file> [--path <node>] [-p name=value]...

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// oscarquery - Filter, sort and limit queries over an Oscar film catalog
#[derive(Parser, Debug)]
#[command(name = "oscarquery")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the catalog and serve queries over HTTP
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./oscarquery.json")]
        config: PathBuf,
    },

    /// Execute a single query and print the result
    Query {
        /// Path to the JSON resource tree
        #[arg(long)]
        catalog: PathBuf,

        /// Path of the film container inside the tree
        #[arg(long, default_value = "/")]
        path: String,

        /// Query parameter as name=value; may repeat, last value wins
        #[arg(short = 'p', long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

/// Splits `name=value`; a bare `name` gets an empty value
pub fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) => Ok((name.to_string(), value.to_string())),
        None => Ok((raw.to_string(), String::new())),
    }
}

//! CLI argument definitions using clap
//!
//! Commands:
//! - zookeepr serve [--config <path>] [--port <port>] [--data <path>]
//! - zookeepr init [--data <path>]
//! - zookeepr query [--data <path>] [--name ..] [--species ..] [--diet ..] [--trait ..]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// zookeepr - A small JSON-backed animal registry
#[derive(Parser, Debug)]
#[command(name = "zookeepr")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the HTTP API
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on (overrides config and PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Backing document (overrides config)
        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// Create an empty backing document
    Init {
        /// Backing document to create
        #[arg(long, default_value = "./data/animals.json")]
        data: PathBuf,
    },

    /// Print matching animals as JSON and exit
    Query {
        /// Backing document to read
        #[arg(long, default_value = "./data/animals.json")]
        data: PathBuf,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        species: Option<String>,

        #[arg(long)]
        diet: Option<String>,

        /// Required personality trait (repeatable)
        #[arg(long = "trait")]
        traits: Vec<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

//! CLI command implementations
//!
//! Configuration precedence for `serve`, lowest first:
//! defaults, `--config` file, `PORT` environment variable, CLI flags.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::Logger;
use crate::query::AnimalQuery;
use crate::storage::AnimalStore;

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::write_json;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port, data } => {
            let config = resolve_config(config.as_deref(), port, data)?;
            serve(config)
        }
        Command::Init { data } => init(&data),
        Command::Query {
            data,
            name,
            species,
            diet,
            traits,
        } => {
            let query = AnimalQuery {
                personality_traits: traits,
                diet,
                species,
                name,
            };
            query_animals(&data, &query)
        }
    }
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> CliResult<HttpServerConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

    serde_json::from_str(&content)
        .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
}

/// Merge config file, environment and flags into one configuration
pub fn resolve_config(
    config_path: Option<&Path>,
    port: Option<u16>,
    data: Option<PathBuf>,
) -> CliResult<HttpServerConfig> {
    let mut config = match config_path {
        Some(path) => load_config(path)?,
        None => HttpServerConfig::default(),
    };

    config
        .apply_env()
        .map_err(|raw| CliError::config_error(format!("Invalid PORT value: '{}'", raw)))?;

    if let Some(port) = port {
        config.port = port;
    }
    if let Some(data) = data {
        config.data_path = data;
    }

    Ok(config)
}

/// Create an empty backing document
pub fn init(data_path: &Path) -> CliResult<()> {
    AnimalStore::create(data_path)?;
    write_json(&serde_json::json!({
        "initialized": true,
        "path": data_path.display().to_string(),
    }))
}

/// Open the store and serve the HTTP API until the process exits
pub fn serve(config: HttpServerConfig) -> CliResult<()> {
    let store = AnimalStore::open(&config.data_path).map_err(|e| {
        e.log("STORE_LOAD_FAILED");
        CliError::from(e)
    })?;

    let server = HttpServer::new(config, Arc::new(store));

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })?;

    Logger::info("SERVER_STOPPED", &[]);
    Ok(())
}

/// Print the animals matching `query` as a JSON array
pub fn query_animals(data_path: &Path, query: &AnimalQuery) -> CliResult<()> {
    let store = AnimalStore::open(data_path)?;
    write_json(&store.find(query))
}

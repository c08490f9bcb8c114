//! CLI command implementations
//!
//! `serve` loads everything up front and then only reads:
//!
//! 1. Load and validate the configuration
//! 2. Load the resource tree once
//! 3. Share it read-only with every request
//! 4. Serve until the listener fails

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::film::{FilmSource, ResourceTree, ResourceTreeSource};
use crate::http_server::{CatalogState, HttpServer, HttpServerConfig};
use crate::observability::{
    log_event, log_event_with_fields, Event, MetricsRegistry, ObservationScope,
};
use crate::query::{ParameterMap, QueryEngine, QueryParser, SearchResult};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// JSON resource tree holding the films (required)
    pub catalog_path: String,

    /// Listener settings: `host`, `port`, `cors_origins` (all optional)
    #[serde(flatten)]
    pub http: HttpServerConfig,

    /// Resource type a node must carry to be served as a film container
    #[serde(default = "default_container_resource_type")]
    pub container_resource_type: String,
}

fn default_container_resource_type() -> String {
    "test/filmEntryContainer".to_string()
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate field values
    pub fn validate(&self) -> CliResult<()> {
        if self.catalog_path.trim().is_empty() {
            return Err(CliError::config_error("catalog_path must not be empty"));
        }

        if self.http.port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }

        if self.container_resource_type.trim().is_empty() {
            return Err(CliError::config_error(
                "container_resource_type must not be empty",
            ));
        }

        Ok(())
    }

    /// Catalog location as a path
    pub fn catalog_path(&self) -> &Path {
        Path::new(&self.catalog_path)
    }

    /// HTTP settings of this configuration
    pub fn http_config(&self) -> &HttpServerConfig {
        &self.http
    }
}

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
        Command::Serve { config } => serve(&config),
        Command::Query {
            catalog,
            path,
            params,
        } => {
            let result = query(&catalog, &path, params.into_iter().collect())?;
            write_response(&result)
        }
    }
}

/// Load the catalog and serve queries until the server stops
pub fn serve(config_path: &Path) -> CliResult<()> {
    log_event(Event::BootStart);

    let config = Config::load(config_path)?;
    let config_display = config_path.display().to_string();
    log_event_with_fields(Event::ConfigLoaded, &[("path", config_display.as_str())]);

    let tree = load_catalog(config.catalog_path())?;
    let state = Arc::new(CatalogState::new(
        Arc::new(tree),
        config.container_resource_type.clone(),
        Arc::new(MetricsRegistry::new()),
    ));
    let server = HttpServer::with_config(config.http_config().clone(), state);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::server_error(format!("Failed to create tokio runtime: {}", e)))?;

    let outcome = rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::server_error(format!("HTTP server failed: {}", e)))
    });

    log_event(Event::ShutdownComplete);
    outcome
}

/// Run one query against the container at `path` inside `catalog`
pub fn query(catalog: &Path, path: &str, params: ParameterMap) -> CliResult<SearchResult> {
    let tree = load_catalog(catalog)?;

    let films = ResourceTreeSource
        .load(tree.resolve(path))?
        .ok_or_else(|| CliError::query_error(format!("No resource at '{}'", path)))?;

    let query = QueryParser::parse(&params)?;
    Ok(QueryEngine::new().execute(&films, &query))
}

/// Read the resource tree, logging the load as one observed operation
fn load_catalog(path: &Path) -> CliResult<ResourceTree> {
    let display = path.display().to_string();
    let scope = ObservationScope::with_fields("CATALOG_LOAD", &[("path", display.as_str())]);

    match ResourceTree::load(path) {
        Ok(tree) => {
            scope.complete();
            log_event_with_fields(Event::CatalogLoaded, &[("path", display.as_str())]);
            Ok(tree)
        }
        Err(e) => {
            let reason = e.to_string();
            scope.fail(&reason);
            Err(CliError::io_error(format!(
                "Failed to load catalog '{}': {}",
                display, reason
            )))
        }
    }
}

//! Film container routes
//!
//! `GET /<container path>.json?<parameters>` runs one query against the films
//! stored below the container node.
//!
//! # Request Flow (strict order)
//!
//! 1. Require the `.json` extension
//! 2. Resolve the container node (404 when absent)
//! 3. Check the container resource type (404 on mismatch)
//! 4. Parse the query string, last value wins (400 on invalid input)
//! 5. Map the child nodes to films (500 on malformed nodes)
//! 6. Execute and respond with `{"result": [...]}`

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::film::{FilmSource, ResourceTree, ResourceTreeSource};
use crate::observability::{log_event_with_fields, Event, MetricsRegistry, Timer};
use crate::query::{ParameterMap, QueryEngine, QueryParser, SearchResult};

use super::errors::{ApiError, ApiResult};

/// Extension the film routes are bound to
pub const JSON_EXTENSION: &str = ".json";

/// Shared, read-only state behind the film routes
pub struct CatalogState {
    tree: Arc<ResourceTree>,
    container_type: String,
    metrics: Arc<MetricsRegistry>,
    engine: QueryEngine,
}

impl CatalogState {
    pub fn new(
        tree: Arc<ResourceTree>,
        container_type: impl Into<String>,
        metrics: Arc<MetricsRegistry>,
    ) -> Self {
        Self {
            tree,
            container_type: container_type.into(),
            metrics,
            engine: QueryEngine::new(),
        }
    }

    pub fn metrics(&self) -> &Arc<MetricsRegistry> {
        &self.metrics
    }

    /// Runs a query for the resource at `path` (extension already removed)
    pub fn search(&self, path: &str, params: &ParameterMap) -> ApiResult<SearchResult> {
        let node = match self.tree.resolve(path) {
            Some(node) => node,
            None => {
                self.metrics.record_source_missing();
                log_event_with_fields(Event::SourceMissing, &[("path", path)]);
                return Err(ApiError::NotFound(path.to_string()));
            }
        };

        if ResourceTree::resource_type(node) != Some(self.container_type.as_str()) {
            return Err(ApiError::NotAContainer {
                path: path.to_string(),
            });
        }

        let query = QueryParser::parse(params).map_err(|e| {
            self.metrics.record_rejected();
            let reason = e.to_string();
            log_event_with_fields(
                Event::QueryRejected,
                &[("code", e.code()), ("path", path), ("reason", reason.as_str())],
            );
            ApiError::from(e)
        })?;
        let filter_count = query.filter_count().to_string();
        log_event_with_fields(
            Event::QueryParsed,
            &[
                ("filters", filter_count.as_str()),
                ("path", path),
                ("sort_by", query.sort_by().as_str()),
            ],
        );

        let films = ResourceTreeSource
            .load(Some(node))
            .map_err(|e| {
                let reason = e.to_string();
                log_event_with_fields(
                    Event::SourceMappingFailed,
                    &[("path", path), ("reason", reason.as_str())],
                );
                ApiError::from(e)
            })?
            .ok_or_else(|| ApiError::NotFound(path.to_string()))?;

        Ok(self.engine.execute(&films, &query))
    }
}

/// Create the film container route
pub fn film_routes(state: Arc<CatalogState>) -> Router {
    Router::new()
        .route("/*path", get(film_query_handler))
        .with_state(state)
}

async fn film_query_handler(
    State(state): State<Arc<CatalogState>>,
    Path(path): Path<String>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Json<SearchResult>> {
    let timer = Timer::start();

    let resource_path = path
        .strip_suffix(JSON_EXTENSION)
        .ok_or_else(|| ApiError::NotFound(path.clone()))?;

    let params: ParameterMap = pairs.into_iter().collect();
    let result = state.search(resource_path, &params)?;

    state.metrics.record_query(result.len());
    let duration = timer.elapsed_ms().to_string();
    let matched = result.matched_count.to_string();
    let returned = result.len().to_string();
    let scanned = result.scanned_count.to_string();
    log_event_with_fields(
        Event::QueryExecuted,
        &[
            ("duration_ms", duration.as_str()),
            ("matched", matched.as_str()),
            ("path", resource_path),
            ("returned", returned.as_str()),
            ("scanned", scanned.as_str()),
        ],
    );

    Ok(Json(result))
}

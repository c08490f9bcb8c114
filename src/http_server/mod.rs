//! # HTTP Server Module
//!
//! Serves film container queries over HTTP.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/metrics` - Query counters
//! - `/<container path>.json` - Filtered, sorted and limited films

pub mod config;
pub mod errors;
pub mod film_routes;
pub mod observability_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use film_routes::{film_routes, CatalogState};
pub use server::HttpServer;

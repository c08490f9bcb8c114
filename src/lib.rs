//! oscarquery - Filter, sort and limit queries over an Oscar film catalog
//!
//! - [`film`]: film records and the JSON resource tree they are loaded from
//! - [`query`]: parameter parsing and query evaluation
//! - [`http_server`]: `GET /<container>.json` over axum
//! - [`cli`]: `serve` and one-shot `query` commands
//! - [`observability`]: JSON-line logging and counters

pub mod cli;
pub mod film;
pub mod http_server;
pub mod observability;
pub mod query;

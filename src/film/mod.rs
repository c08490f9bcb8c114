//! Film records and the resource tree they are loaded from
//!
//! The query core only ever sees fully-typed [`Film`] values. Turning a
//! generic JSON resource node into a `Film` happens here, through an explicit
//! fallible mapping, before any query runs.
//!
//! # Loading Flow
//!
//! 1. Resolve the container node inside the [`ResourceTree`]
//! 2. Hand the (possibly absent) node to a [`FilmSource`]
//! 3. Map every child node to a `Film`, in document order

mod errors;
mod record;
mod source;
mod tree;

pub use errors::{MappingError, MappingResult};
pub use record::Film;
pub use source::{map_node, FilmSource, ResourceTreeSource};
pub use tree::{ResourceTree, RESOURCE_TYPE_KEY};

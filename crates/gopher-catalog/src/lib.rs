//! Directory-backed gopher image catalog.
//!
//! The catalog is re-read from disk on every request. No state is kept
//! between lookups, so concurrent readers need no coordination.

mod catalog;
mod error;
mod resolver;
mod types;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use resolver::Resolver;
pub use types::*;

//! Route resolution and URL path normalization

pub mod path;
pub mod route_table;

pub use path::{normalize_path, paths_match};
pub use route_table::RouteTable;

use crate::error::DomainError;

/// Turns a symbolic route name into a concrete path.
///
/// An unknown name is an error, never a fallback link.
pub trait RouteResolver: Send + Sync {
    fn resolve(&self, name: &str) -> Result<String, DomainError>;
}

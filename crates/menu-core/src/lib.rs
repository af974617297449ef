//! # Menu Core
//! 
//! Domain entities, repository ports, route resolution and the menu tree
//! builder that marks the active branch of a navigation menu.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod routing;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;

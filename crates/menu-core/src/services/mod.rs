//! Domain services (business logic)

pub mod menu_service;
pub mod menu_tree_builder;
pub mod request_cache;

pub use menu_service::MenuService;
pub use menu_tree_builder::MenuTreeBuilder;
pub use request_cache::MenuRequestCache;

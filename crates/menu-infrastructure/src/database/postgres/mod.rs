//! PostgreSQL repository implementations
//!
//! Expected tables:
//! - `menus (id BIGSERIAL PRIMARY KEY, title VARCHAR(150), slug VARCHAR(50) UNIQUE)`
//! - `menu_items (id BIGSERIAL PRIMARY KEY, menu_id BIGINT REFERENCES menus ON DELETE CASCADE,
//!   parent_id BIGINT NULL REFERENCES menu_items ON DELETE CASCADE, title VARCHAR(200),
//!   named_url VARCHAR(200) NULL, url VARCHAR(300) NULL, item_order INTEGER CHECK (item_order >= 0))`

pub mod menu_repo_impl;
pub mod menu_item_repo_impl;

pub use menu_repo_impl::PgMenuRepository;
pub use menu_item_repo_impl::PgMenuItemRepository;

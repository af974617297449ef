//! Repository traits (ports)

pub mod menu_repository;
pub mod menu_item_repository;

pub use menu_repository::MenuRepository;
pub use menu_item_repository::MenuItemRepository;

#[cfg(test)]
pub use menu_item_repository::MockMenuItemRepository;

//! Common types

/// Primary key of menus and menu items.
pub type EntityId = i64;

//! # Menu Core - Domain Module
//! 
//! Menus, their items and the rendered tree handed to templates.

pub mod menu;
pub mod menu_item;
pub mod menu_tree;

pub use menu::{Menu, NewMenu};
pub use menu_item::{MenuItem, MenuItemSet, MenuLink, NewMenuItem};
pub use menu_tree::{MenuNode, MenuTree};

//! Menu item repository trait (port)

use async_trait::async_trait;
use crate::domain::{MenuItem, MenuItemSet, NewMenuItem};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuItemRepository: Send + Sync {
    /// All items of the menu in one read, ordered by
    /// `(parent_id NULLS FIRST, order, id)`.
    async fn fetch_by_menu_slug(&self, slug: &str) -> Result<MenuItemSet, DomainError>;
    async fn create(&self, item: &NewMenuItem) -> Result<MenuItem, DomainError>;
}

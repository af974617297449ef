//! Menu repository trait (port)

use async_trait::async_trait;
use crate::domain::{Menu, NewMenu};
use crate::error::DomainError;

#[async_trait]
pub trait MenuRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Menu>, DomainError>;
    async fn create(&self, menu: &NewMenu) -> Result<Menu, DomainError>;
}

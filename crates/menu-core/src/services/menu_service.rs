// ============================================================================
// Menu Core - Menu Service
// File: crates/menu-core/src/services/menu_service.rs
// ============================================================================
//! Renders navigation menus: memoized store read plus tree build

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::domain::{MenuItemSet, MenuTree};
use crate::error::DomainError;
use crate::repositories::MenuItemRepository;
use crate::routing::RouteResolver;
use crate::services::{MenuRequestCache, MenuTreeBuilder};

/// Entry point for every navigation widget on a page.
///
/// Holds no per-request state and is shared between concurrent requests;
/// request scoping lives in the [`MenuRequestCache`] passed to each call.
pub struct MenuService<R: MenuItemRepository + ?Sized> {
    item_repo: Arc<R>,
    resolver: Arc<dyn RouteResolver>,
}

impl<R: MenuItemRepository + ?Sized> MenuService<R> {
    pub fn new(item_repo: Arc<R>, resolver: Arc<dyn RouteResolver>) -> Self {
        Self { item_repo, resolver }
    }

    /// Reads all items of a menu, at most once per cache.
    ///
    /// Without a cache every call goes to the store.
    pub async fn fetch_menu_items(
        &self,
        slug: &str,
        cache: Option<&mut MenuRequestCache>,
    ) -> Result<Arc<MenuItemSet>, DomainError> {
        if let Some(items) = cache.as_ref().and_then(|c| c.get(slug)) {
            return Ok(items);
        }

        let items = Arc::new(self.item_repo.fetch_by_menu_slug(slug).await?);
        debug!("Fetched {} items for menu '{}'", items.len(), slug);

        if let Some(cache) = cache {
            cache.insert(slug, Arc::clone(&items));
        }
        Ok(items)
    }

    /// Builds the tree of one menu for the page at `current_path`.
    pub async fn render_menu(
        &self,
        slug: &str,
        current_path: Option<&str>,
        cache: &mut MenuRequestCache,
    ) -> Result<MenuTree, DomainError> {
        let items = self.fetch_menu_items(slug, Some(cache)).await?;

        let builder = MenuTreeBuilder::new(slug, &items, current_path, self.resolver.as_ref())
            .map_err(|e| {
                error!("Failed to build menu '{}': {}", slug, e);
                e
            })?;

        Ok(builder.build())
    }

    /// Renders several widgets of one page, sharing the page's cache.
    pub async fn render_menus(
        &self,
        slugs: &[String],
        current_path: Option<&str>,
        cache: &mut MenuRequestCache,
    ) -> Result<Vec<MenuTree>, DomainError> {
        // Every store read adds one cache entry; hits add none.
        let cached_before = cache.len();
        let mut trees = Vec::with_capacity(slugs.len());
        for slug in slugs {
            trees.push(self.render_menu(slug, current_path, cache).await?);
        }
        info!(
            "Rendered {} menus for {:?} with {} store reads",
            trees.len(),
            current_path,
            cache.len() - cached_before
        );
        Ok(trees)
    }
}

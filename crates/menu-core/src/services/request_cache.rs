//! Per-render memo of store reads.
//!
//! One cache belongs to one render pass (one HTTP request). It is passed
//! into every menu render of that pass and dropped with it.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::domain::MenuItemSet;

#[derive(Debug, Default)]
pub struct MenuRequestCache {
    entries: HashMap<String, Arc<MenuItemSet>>,
}

impl MenuRequestCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slug: &str) -> Option<Arc<MenuItemSet>> {
        let entry = self.entries.get(slug).cloned();
        if entry.is_some() {
            debug!("Menu '{}' served from request cache", slug);
        }
        entry
    }

    pub fn insert(&mut self, slug: &str, items: Arc<MenuItemSet>) {
        self.entries.insert(slug.to_string(), items);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut cache = MenuRequestCache::new();
        assert!(cache.get("main").is_none());

        cache.insert("main", Arc::new(MenuItemSet::empty()));
        assert_eq!(cache.len(), 1);
        assert!(cache.get("main").is_some());
        assert!(cache.get("footer").is_none());
    }
}

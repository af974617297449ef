// ============================================================================
// Menu Core - Menu Tree Builder
// File: crates/menu-core/src/services/menu_tree_builder.rs
// ============================================================================
//! Turns the flat item list of one menu into the nested tree handed to
//! templates, marking the item matching the current path as active and
//! expanding every item above it.

use std::collections::{HashMap, HashSet};

use menu_shared::constants::FALLBACK_URL;
use menu_shared::EntityId;
use tracing::{debug, warn};

use crate::domain::{MenuItem, MenuItemSet, MenuLink, MenuNode, MenuTree};
use crate::error::DomainError;
use crate::routing::{normalize_path, RouteResolver};

/// Per-render index over one menu's items.
///
/// Items live in an id-keyed arena; the tree shape is a separate adjacency
/// map from parent id (`None` = root) to ordered children.
pub struct MenuTreeBuilder<'a> {
    menu_slug: &'a str,
    menu: &'a MenuItemSet,
    items_by_id: HashMap<EntityId, &'a MenuItem>,
    children: HashMap<Option<EntityId>, Vec<&'a MenuItem>>,
    urls: HashMap<EntityId, String>,
    active_id: Option<EntityId>,
    ancestor_ids: HashSet<EntityId>,
}

impl<'a> MenuTreeBuilder<'a> {
    /// Indexes the items, resolves every link and finds the active branch.
    ///
    /// `current_path` is `None` when there is no request to match against;
    /// nothing is active then.
    pub fn new(
        menu_slug: &'a str,
        menu: &'a MenuItemSet,
        current_path: Option<&str>,
        resolver: &dyn RouteResolver,
    ) -> Result<Self, DomainError> {
        let items_by_id: HashMap<EntityId, &MenuItem> =
            menu.items.iter().map(|item| (item.id, item)).collect();

        let mut children: HashMap<Option<EntityId>, Vec<&MenuItem>> = HashMap::new();
        for item in &menu.items {
            let parent_id = match item.parent_id {
                Some(parent_id) if items_by_id.contains_key(&parent_id) => Some(parent_id),
                Some(parent_id) => {
                    warn!(
                        "Menu '{}': item {} references missing parent {}, rendering it at root level",
                        menu_slug, item.id, parent_id
                    );
                    None
                }
                None => None,
            };
            children.entry(parent_id).or_default().push(item);
        }
        // Demoted orphans join the root list, so every list is ordered again.
        for siblings in children.values_mut() {
            siblings.sort_by_key(|item| (item.order, item.id));
        }

        let mut urls = HashMap::with_capacity(menu.items.len());
        for item in &menu.items {
            urls.insert(item.id, resolve_link(&item.link, resolver)?);
        }

        let mut builder = Self {
            menu_slug,
            menu,
            items_by_id,
            children,
            urls,
            active_id: None,
            ancestor_ids: HashSet::new(),
        };
        let active_id = current_path.and_then(|path| builder.detect_active_item_id(path));
        builder.active_id = active_id;
        let ancestor_ids = builder.collect_ancestor_ids();
        builder.ancestor_ids = ancestor_ids;

        debug!(
            "Menu '{}': {} items, active {:?}, {} ancestors",
            menu_slug,
            menu.items.len(),
            builder.active_id,
            builder.ancestor_ids.len()
        );

        Ok(builder)
    }

    pub fn build(&self) -> MenuTree {
        MenuTree {
            slug: self.menu_slug.to_string(),
            title: self.menu.title_or(self.menu_slug).to_string(),
            nodes: self.build_nodes(None, 0),
        }
    }

    pub fn active_id(&self) -> Option<EntityId> {
        self.active_id
    }

    pub fn ancestor_ids(&self) -> &HashSet<EntityId> {
        &self.ancestor_ids
    }

    fn build_nodes(&self, parent_id: Option<EntityId>, depth: usize) -> Vec<MenuNode> {
        let Some(siblings) = self.children.get(&parent_id) else {
            return Vec::new();
        };

        siblings
            .iter()
            .map(|item| {
                // Depth can only exceed the item count on a parent cycle.
                let show_children = self.should_expand(item.id) && depth < self.menu.items.len();
                let children = if show_children {
                    self.build_nodes(Some(item.id), depth + 1)
                } else {
                    Vec::new()
                };

                MenuNode {
                    id: item.id,
                    title: item.title.clone(),
                    url: self
                        .urls
                        .get(&item.id)
                        .cloned()
                        .unwrap_or_else(|| FALLBACK_URL.to_string()),
                    is_active: self.active_id == Some(item.id),
                    is_ancestor: self.ancestor_ids.contains(&item.id),
                    show_children,
                    has_children: self
                        .children
                        .get(&Some(item.id))
                        .is_some_and(|c| !c.is_empty()),
                    children,
                }
            })
            .collect()
    }

    /// First item in store order whose URL matches the path.
    fn detect_active_item_id(&self, current_path: &str) -> Option<EntityId> {
        let current = normalize_path(Some(current_path));
        self.menu
            .items
            .iter()
            .find(|item| {
                self.urls
                    .get(&item.id)
                    .is_some_and(|url| normalize_path(Some(url)) == current)
            })
            .map(|item| item.id)
    }

    fn collect_ancestor_ids(&self) -> HashSet<EntityId> {
        let mut ancestors = HashSet::new();
        let Some(active) = self.active_id.and_then(|id| self.items_by_id.get(&id)) else {
            return ancestors;
        };

        let mut parent_id = active.parent_id;
        while let Some(id) = parent_id {
            if ancestors.len() >= self.menu.items.len() {
                warn!("Menu '{}': parent chain longer than the menu, stopping", self.menu_slug);
                break;
            }
            let Some(parent) = self.items_by_id.get(&id) else {
                break;
            };
            if !ancestors.insert(id) {
                warn!("Menu '{}': parent cycle through item {}", self.menu_slug, id);
                break;
            }
            parent_id = parent.parent_id;
        }
        ancestors
    }

    fn should_expand(&self, item_id: EntityId) -> bool {
        self.active_id == Some(item_id) || self.ancestor_ids.contains(&item_id)
    }
}

fn resolve_link(link: &MenuLink, resolver: &dyn RouteResolver) -> Result<String, DomainError> {
    match link {
        MenuLink::NamedRoute(name) => resolver.resolve(name),
        MenuLink::ExplicitUrl(url) => Ok(url.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::RouteTable;

    fn item(id: EntityId, parent_id: Option<EntityId>, title: &str, url: &str, order: u32) -> MenuItem {
        MenuItem {
            id,
            menu_id: 1,
            parent_id,
            title: title.to_string(),
            link: MenuLink::ExplicitUrl(url.to_string()),
            order,
        }
    }

    fn named(id: EntityId, parent_id: Option<EntityId>, title: &str, route: &str, order: u32) -> MenuItem {
        MenuItem {
            link: MenuLink::NamedRoute(route.to_string()),
            ..item(id, parent_id, title, "", order)
        }
    }

    fn routes() -> RouteTable {
        RouteTable::new()
            .with_route("home", "/")
            .with_route("contacts", "/contacts/")
    }

    /// Home, Docs > API > v1, Contacts
    fn site_menu() -> MenuItemSet {
        MenuItemSet::new(
            "Test menu",
            vec![
                named(1, None, "Home", "home", 1),
                item(2, None, "Docs", "/docs/", 2),
                named(5, None, "Contacts", "contacts", 3),
                item(3, Some(2), "API", "/docs/api/", 1),
                item(4, Some(3), "v1", "/docs/api/v1/", 1),
            ],
        )
    }

    fn build(menu: &MenuItemSet, path: Option<&str>) -> MenuTree {
        let resolver = routes();
        MenuTreeBuilder::new("test_menu", menu, path, &resolver)
            .unwrap()
            .build()
    }

    #[test]
    fn test_active_child_expands_its_parent() {
        let menu = MenuItemSet::new(
            "Main",
            vec![
                item(1, None, "A", "/a/", 1),
                item(2, None, "B", "/b/", 2),
                item(3, Some(2), "C", "/b/c/", 1),
            ],
        );
        let tree = build(&menu, Some("/b/c/"));

        let a = &tree.nodes[0];
        let b = &tree.nodes[1];
        assert!(!a.is_active);
        assert!(!a.show_children);
        assert!(b.is_ancestor);
        assert!(b.show_children);
        assert_eq!(b.children.len(), 1);

        let c = &b.children[0];
        assert_eq!(c.id, 3);
        assert!(c.is_active);
        assert!(c.show_children);
        assert!(!c.is_ancestor);
    }

    #[test]
    fn test_active_item_expands_own_children() {
        let menu = site_menu();
        let tree = build(&menu, Some("/docs/api/"));

        let docs = tree.nodes.iter().find(|n| n.title == "Docs").unwrap();
        assert!(docs.is_ancestor);
        assert!(docs.show_children);

        let api = &docs.children[0];
        assert!(api.is_active);
        assert!(api.show_children);
        assert_eq!(api.children[0].title, "v1");
        assert!(!api.children[0].show_children);
    }

    #[test]
    fn test_collapsed_branches_report_children() {
        let menu = site_menu();
        let tree = build(&menu, Some("/contacts/"));

        let docs = tree.find(2).unwrap();
        assert!(docs.has_children);
        assert!(!docs.show_children);
        assert!(docs.children.is_empty());
        assert!(!tree.find(5).unwrap().has_children);
    }

    #[test]
    fn test_named_routes_resolve_to_paths() {
        let menu = site_menu();
        let tree = build(&menu, Some("/"));

        let home = &tree.nodes[0];
        assert_eq!(home.url, "/");
        assert!(home.is_active);
        assert_eq!(tree.active().map(|n| n.id), Some(1));
    }

    #[test]
    fn test_root_order_follows_order_then_id() {
        let menu = MenuItemSet::new(
            "Main",
            vec![
                item(9, None, "Late", "/late/", 2),
                item(7, None, "Tie B", "/tie-b/", 1),
                item(3, None, "Tie A", "/tie-a/", 1),
            ],
        );
        let tree = build(&menu, None);
        let ids: Vec<EntityId> = tree.nodes.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![3, 7, 9]);
    }

    #[test]
    fn test_no_current_path_means_nothing_active() {
        let menu = site_menu();
        let resolver = routes();
        let builder = MenuTreeBuilder::new("test_menu", &menu, None, &resolver).unwrap();
        assert_eq!(builder.active_id(), None);
        assert!(builder.ancestor_ids().is_empty());
        assert!(builder.build().nodes.iter().all(|n| !n.show_children));
    }

    #[test]
    fn test_trailing_slash_and_query_ignored_when_matching() {
        let menu = site_menu();
        let tree = build(&menu, Some("/docs/api?tab=ref"));
        assert_eq!(tree.active().map(|n| n.id), Some(3));
    }

    #[test]
    fn test_colliding_urls_activate_earliest_only() {
        let menu = MenuItemSet::new(
            "Main",
            vec![
                item(1, None, "First", "/same/", 1),
                item(2, None, "Second", "/same", 2),
            ],
        );
        let tree = build(&menu, Some("/same/"));
        assert!(tree.nodes[0].is_active);
        assert!(!tree.nodes[1].is_active);
    }

    #[test]
    fn test_unknown_route_fails_the_build() {
        let menu = MenuItemSet::new("Main", vec![named(1, None, "Typo", "contcts", 1)]);
        let resolver = routes();
        let result = MenuTreeBuilder::new("main", &menu, Some("/"), &resolver);
        assert!(matches!(result, Err(DomainError::UnknownRoute(name)) if name == "contcts"));
    }

    #[test]
    fn test_dangling_parent_rendered_at_root() {
        let menu = MenuItemSet::new(
            "Main",
            vec![
                item(1, None, "Home", "/", 1),
                item(2, Some(99), "Orphan", "/orphan/", 2),
            ],
        );
        let tree = build(&menu, Some("/orphan/"));

        assert_eq!(tree.nodes.len(), 2);
        let orphan = &tree.nodes[1];
        assert_eq!(orphan.id, 2);
        assert!(orphan.is_active);
        assert!(!tree.nodes[0].is_ancestor);
    }

    #[test]
    fn test_empty_menu_uses_slug_as_title() {
        let menu = MenuItemSet::empty();
        let tree = build(&menu, Some("/"));
        assert_eq!(tree.title, "test_menu");
        assert!(tree.nodes.is_empty());
    }

    #[test]
    fn test_menu_title_comes_from_owning_menu() {
        let menu = site_menu();
        assert_eq!(build(&menu, None).title, "Test menu");
    }

    #[test]
    fn test_build_is_idempotent() {
        let menu = site_menu();
        let before = menu.clone();
        let first = build(&menu, Some("/docs/api/v1/"));
        let second = build(&menu, Some("/docs/api/v1/"));
        assert_eq!(first, second);
        assert_eq!(menu, before);
    }

    #[test]
    fn test_parent_cycle_terminates() {
        let menu = MenuItemSet::new(
            "Main",
            vec![
                item(1, Some(2), "Loop A", "/a/", 1),
                item(2, Some(1), "Loop B", "/b/", 1),
                item(3, Some(1), "Leaf", "/leaf/", 1),
            ],
        );
        let resolver = routes();
        let builder = MenuTreeBuilder::new("main", &menu, Some("/leaf/"), &resolver).unwrap();
        let ancestors: Vec<EntityId> = {
            let mut ids: Vec<_> = builder.ancestor_ids().iter().copied().collect();
            ids.sort();
            ids
        };
        assert_eq!(ancestors, vec![1, 2]);
        // Nothing is reachable from the root list, but the build still returns.
        assert!(builder.build().nodes.is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let menu = MenuItemSet::new("Main", vec![item(1, None, "Home", "/", 1)]);
        let tree = build(&menu, Some("/"));
        let json = serde_json::to_value(&tree).unwrap();

        assert_eq!(json["slug"], "test_menu");
        assert_eq!(json["title"], "Main");
        let node = &json["nodes"][0];
        for key in [
            "id",
            "title",
            "url",
            "is_active",
            "is_ancestor",
            "show_children",
            "has_children",
            "children",
        ] {
            assert!(node.get(key).is_some(), "missing {}", key);
        }
        assert_eq!(node["url"], "/");
    }
}

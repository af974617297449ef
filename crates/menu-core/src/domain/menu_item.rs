// ============================================================================
// Menu Core - Menu Item Entity
// File: crates/menu-core/src/domain/menu_item.rs
// Description: Flat menu item rows with parent references and link modes
// ============================================================================

use menu_shared::constants::{MAX_EXPLICIT_URL_LENGTH, MAX_NAMED_ROUTE_LENGTH};
use menu_shared::EntityId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::DomainError;

/// How a menu item finds its URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum MenuLink {
    /// Symbolic route name, resolved when the menu is rendered
    NamedRoute(String),
    /// Path used verbatim
    ExplicitUrl(String),
}

impl MenuLink {
    /// Builds a link from the two nullable columns of a stored item.
    ///
    /// Blank values count as unset. Exactly one of them must be present.
    pub fn from_parts(named_url: Option<&str>, url: Option<&str>) -> Result<Self, DomainError> {
        let named_url = named_url.map(str::trim).filter(|v| !v.is_empty());
        let url = url.map(str::trim).filter(|v| !v.is_empty());

        match (named_url, url) {
            (Some(_), Some(_)) => Err(DomainError::MalformedLink(
                "only one of named route or explicit url may be set".to_string(),
            )),
            (None, None) => Err(DomainError::MalformedLink(
                "a named route or an explicit url is required".to_string(),
            )),
            (Some(name), None) => {
                if name.chars().count() > MAX_NAMED_ROUTE_LENGTH {
                    return Err(DomainError::ValidationError(format!(
                        "Named route must be at most {} characters",
                        MAX_NAMED_ROUTE_LENGTH
                    )));
                }
                Ok(MenuLink::NamedRoute(name.to_string()))
            }
            (None, Some(url)) => {
                if url.chars().count() > MAX_EXPLICIT_URL_LENGTH {
                    return Err(DomainError::ValidationError(format!(
                        "Explicit url must be at most {} characters",
                        MAX_EXPLICIT_URL_LENGTH
                    )));
                }
                Ok(MenuLink::ExplicitUrl(url.to_string()))
            }
        }
    }

    pub fn named_route(&self) -> Option<&str> {
        match self {
            MenuLink::NamedRoute(name) => Some(name),
            MenuLink::ExplicitUrl(_) => None,
        }
    }

    pub fn explicit_url(&self) -> Option<&str> {
        match self {
            MenuLink::ExplicitUrl(url) => Some(url),
            MenuLink::NamedRoute(_) => None,
        }
    }
}

/// Menu item entity as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: EntityId,
    pub menu_id: EntityId,
    pub parent_id: Option<EntityId>,
    pub title: String,
    pub link: MenuLink,
    pub order: u32,
}

/// Menu item draft validated before it reaches the store
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewMenuItem {
    pub menu_id: EntityId,
    pub parent_id: Option<EntityId>,

    #[validate(length(min = 1, max = 200, message = "Item title must be between 1 and 200 characters"))]
    pub title: String,

    pub link: MenuLink,
    pub order: u32,
}

impl NewMenuItem {
    pub fn new(
        menu_id: EntityId,
        parent_id: Option<EntityId>,
        title: String,
        named_url: Option<&str>,
        url: Option<&str>,
        order: u32,
    ) -> Result<Self, DomainError> {
        let item = Self {
            menu_id,
            parent_id,
            title: title.trim().to_string(),
            link: MenuLink::from_parts(named_url, url)?,
            order,
        };

        item.validate()?;
        Ok(item)
    }
}

/// Everything the store returns for one menu: its items in
/// `(parent_id, order, id)` order and the owning menu's title when at
/// least one item exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuItemSet {
    pub menu_title: Option<String>,
    pub items: Vec<MenuItem>,
}

impl MenuItemSet {
    pub fn new(menu_title: impl Into<String>, items: Vec<MenuItem>) -> Self {
        let menu_title = if items.is_empty() {
            None
        } else {
            Some(menu_title.into())
        };
        Self { menu_title, items }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Title shown above the menu; an empty menu falls back to its slug.
    pub fn title_or<'a>(&'a self, slug: &'a str) -> &'a str {
        match &self.menu_title {
            Some(title) if !self.items.is_empty() => title.as_str(),
            _ => slug,
        }
    }
}

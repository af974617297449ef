//! Rendered menu tree consumed by the template layer.
//!
//! Field names are part of the rendering contract and serialize as-is.

use menu_shared::EntityId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuTree {
    pub slug: String,
    pub title: String,
    pub nodes: Vec<MenuNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuNode {
    pub id: EntityId,
    pub title: String,
    pub url: String,
    pub is_active: bool,
    pub is_ancestor: bool,
    pub show_children: bool,
    pub has_children: bool,
    pub children: Vec<MenuNode>,
}

impl MenuTree {
    /// Depth-first search for a node by id, expanded branches only.
    pub fn find(&self, id: EntityId) -> Option<&MenuNode> {
        self.nodes.iter().find_map(|node| node.find(id))
    }

    pub fn active(&self) -> Option<&MenuNode> {
        self.nodes.iter().find_map(MenuNode::active)
    }
}

impl MenuNode {
    pub fn find(&self, id: EntityId) -> Option<&MenuNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    pub fn active(&self) -> Option<&MenuNode> {
        if self.is_active {
            return Some(self);
        }
        self.children.iter().find_map(MenuNode::active)
    }
}

// ============================================================================
// Menu Core - Menu Entity
// File: crates/menu-core/src/domain/menu.rs
// Description: Independently addressable collection of menu items
// ============================================================================

use menu_shared::EntityId;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Menu entity as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    pub id: EntityId,
    pub title: String,
    pub slug: String,
}

/// Menu draft validated before it reaches the store
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewMenu {
    #[validate(length(min = 1, max = 150, message = "Menu title must be between 1 and 150 characters"))]
    pub title: String,

    #[validate(
        length(min = 1, max = 50, message = "Menu slug must be between 1 and 50 characters"),
        custom(function = "validate_slug")
    )]
    pub slug: String,
}

impl NewMenu {
    pub fn new(title: String, slug: String) -> Result<Self, validator::ValidationErrors> {
        let menu = Self {
            title: title.trim().to_string(),
            slug: slug.trim().to_string(),
        };

        menu.validate()?;
        Ok(menu)
    }
}

fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    let valid = slug
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        let mut error = ValidationError::new("slug");
        error.message = Some("Slug may only contain letters, digits, '-' and '_'".into());
        Err(error)
    }
}

// ============================================================================
// Menu Infrastructure - PostgreSQL Menu Item Repository
// File: crates/menu-infrastructure/src/database/postgres/menu_item_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::{debug, error, info};

use menu_core::domain::{MenuItem, MenuItemSet, MenuLink, NewMenuItem};
use menu_core::error::DomainError;
use menu_core::repositories::MenuItemRepository;
use menu_shared::EntityId;

pub struct PgMenuItemRepository {
    pool: PgPool,
}

impl PgMenuItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuItemRepository for PgMenuItemRepository {
    async fn fetch_by_menu_slug(&self, slug: &str) -> Result<MenuItemSet, DomainError> {
        let rows: Vec<MenuItemRow> = sqlx::query_as(
            r#"
            SELECT
                mi.id, mi.menu_id, mi.parent_id, mi.title,
                mi.named_url, mi.url, mi.item_order,
                m.title AS menu_title
            FROM menu_items mi
            JOIN menus m ON m.id = mi.menu_id
            WHERE m.slug = $1
            ORDER BY mi.parent_id NULLS FIRST, mi.item_order, mi.id
            "#
        )
        .bind(slug)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error fetching items of menu {}: {}", slug, e);
            DomainError::DatabaseError(e.to_string())
        })?;

        debug!("Loaded {} rows for menu {}", rows.len(), slug);
        rows_into_set(rows)
    }

    async fn create(&self, item: &NewMenuItem) -> Result<MenuItem, DomainError> {
        info!("Creating menu item '{}' in menu {}", item.title, item.menu_id);

        let item_order = i32::try_from(item.order)
            .map_err(|_| DomainError::ValidationError(format!("Order {} out of range", item.order)))?;

        let row: MenuItemRow = sqlx::query_as(
            r#"
            WITH inserted AS (
                INSERT INTO menu_items (menu_id, parent_id, title, named_url, url, item_order)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING id, menu_id, parent_id, title, named_url, url, item_order
            )
            SELECT inserted.*, m.title AS menu_title
            FROM inserted
            JOIN menus m ON m.id = inserted.menu_id
            "#
        )
        .bind(item.menu_id)
        .bind(item.parent_id)
        .bind(&item.title)
        .bind(item.link.named_route())
        .bind(item.link.explicit_url())
        .bind(item_order)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating menu item: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        info!("Menu item created successfully: {}", row.id);
        row.try_into()
    }
}

fn rows_into_set(rows: Vec<MenuItemRow>) -> Result<MenuItemSet, DomainError> {
    let Some(menu_title) = rows.first().map(|r| r.menu_title.clone()) else {
        return Ok(MenuItemSet::empty());
    };
    let items = rows
        .into_iter()
        .map(MenuItem::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(MenuItemSet::new(menu_title, items))
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct MenuItemRow {
    pub id: EntityId,
    pub menu_id: EntityId,
    pub parent_id: Option<EntityId>,
    pub title: String,
    pub named_url: Option<String>,
    pub url: Option<String>,
    pub item_order: i32,
    pub menu_title: String,
}

impl TryFrom<MenuItemRow> for MenuItem {
    type Error = DomainError;

    fn try_from(row: MenuItemRow) -> Result<Self, Self::Error> {
        let link = MenuLink::from_parts(row.named_url.as_deref(), row.url.as_deref())
            .map_err(|e| {
                error!("Stored menu item {} has an invalid link: {}", row.id, e);
                e
            })?;
        let order = u32::try_from(row.item_order).map_err(|_| {
            DomainError::ValidationError(format!(
                "Menu item {} has negative order {}",
                row.id, row.item_order
            ))
        })?;

        Ok(MenuItem {
            id: row.id,
            menu_id: row.menu_id,
            parent_id: row.parent_id,
            title: row.title,
            link,
            order,
        })
    }
}

// ============================================================================
// Menu Infrastructure - PostgreSQL Menu Repository
// File: crates/menu-infrastructure/src/database/postgres/menu_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::{error, info};

use menu_core::domain::{Menu, NewMenu};
use menu_core::error::DomainError;
use menu_core::repositories::MenuRepository;
use menu_shared::EntityId;

pub struct PgMenuRepository {
    pool: PgPool,
}

impl PgMenuRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuRepository for PgMenuRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Menu>, DomainError> {
        let row: Option<MenuRow> = sqlx::query_as(
            r#"
            SELECT id, title, slug
            FROM menus
            WHERE slug = $1
            "#
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding menu by slug: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, menu: &NewMenu) -> Result<Menu, DomainError> {
        info!("Creating menu: {}", menu.slug);

        let row: MenuRow = sqlx::query_as(
            r#"
            INSERT INTO menus (title, slug)
            VALUES ($1, $2)
            RETURNING id, title, slug
            "#
        )
        .bind(&menu.title)
        .bind(&menu.slug)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating menu: {}", e);
            let msg = e.to_string();
            if msg.contains("unique") || msg.contains("duplicate") {
                DomainError::MenuSlugAlreadyExists(menu.slug.clone())
            } else {
                DomainError::DatabaseError(msg)
            }
        })?;

        info!("Menu created successfully: {}", row.id);
        Ok(row.into())
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct MenuRow {
    pub id: EntityId,
    pub title: String,
    pub slug: String,
}

impl From<MenuRow> for Menu {
    fn from(row: MenuRow) -> Self {
        Menu {
            id: row.id,
            title: row.title,
            slug: row.slug,
        }
    }
}

//! Demo menu for local development, enabled with `app.seed_demo`

use menu_core::domain::{NewMenu, NewMenuItem};
use menu_core::error::DomainError;
use menu_core::repositories::{MenuItemRepository, MenuRepository};
use tracing::info;

pub const DEMO_MENU_SLUG: &str = "main_menu";

pub async fn seed_demo_menu(
    menus: &dyn MenuRepository,
    items: &dyn MenuItemRepository,
) -> Result<(), DomainError> {
    if menus.find_by_slug(DEMO_MENU_SLUG).await?.is_some() {
        info!("Demo menu '{}' already present", DEMO_MENU_SLUG);
        return Ok(());
    }

    let menu = menus
        .create(&NewMenu::new("Main menu".to_string(), DEMO_MENU_SLUG.to_string())?)
        .await?;

    let item = |parent_id, title: &str, named_url, url, order| {
        NewMenuItem::new(menu.id, parent_id, title.to_string(), named_url, url, order)
    };

    items.create(&item(None, "Home", Some("home"), None, 1)?).await?;
    let docs = items.create(&item(None, "Docs", None, Some("/docs/"), 2)?).await?;
    let api = items
        .create(&item(Some(docs.id), "API", Some("docs_api"), None, 1)?)
        .await?;
    items
        .create(&item(Some(api.id), "v1", None, Some("/docs/api/v1/"), 1)?)
        .await?;
    items
        .create(&item(Some(docs.id), "FAQ", Some("docs_faq"), None, 2)?)
        .await?;
    items
        .create(&item(Some(docs.id), "Releases", Some("docs_releases"), None, 3)?)
        .await?;
    items.create(&item(None, "Pricing", Some("pricing"), None, 3)?).await?;
    items.create(&item(None, "Contacts", Some("contacts"), None, 4)?).await?;

    info!("Seeded demo menu '{}' ({})", DEMO_MENU_SLUG, menu.id);
    Ok(())
}

use std::sync::Arc;

use menu_core::repositories::MenuItemRepository;
use menu_core::services::MenuService;
use menu_shared::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub menu_service: Arc<MenuService<dyn MenuItemRepository>>,
    pub config: Arc<AppConfig>,
}

mod seed;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{error, info, warn};

use menu_api::{router, AppState};
use menu_core::repositories::MenuItemRepository;
use menu_core::routing::RouteTable;
use menu_core::services::MenuService;
use menu_infrastructure::database::{connection, PgMenuItemRepository, PgMenuRepository};
use menu_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    menu_shared::telemetry::init_telemetry();

    info!("Menu server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Connect to Database
    info!("Connecting to database...");
    let pool = connection::create_pool(
        &config.database.url,
        config.database.max_connections,
        config.database.min_connections,
    )
    .await?;
    info!("Database connection established.");

    if config.app.seed_demo {
        let menus = PgMenuRepository::new(pool.clone());
        let items = PgMenuItemRepository::new(pool.clone());
        seed::seed_demo_menu(&menus, &items).await?;
    }

    // Named routes
    let routes: RouteTable = config.named_routes().collect();
    if routes.is_empty() {
        warn!("Route table is empty, every named menu link will fail to resolve");
    } else {
        info!("Loaded {} named routes", routes.len());
    }

    // Create App State
    let item_repo: Arc<dyn MenuItemRepository> = Arc::new(PgMenuItemRepository::new(pool));
    let state = AppState {
        menu_service: Arc::new(MenuService::new(item_repo, Arc::new(routes))),
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = router(state).layer(cors_layer(&config.app.allowed_origins));

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter(|origin| origin.as_str() != "*")
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid CORS origin {}: {}", origin, e);
                None
            }
        })
        .collect();

    let allow_origin = if allowed_origins.iter().any(|origin| origin == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

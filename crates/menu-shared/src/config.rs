//! Configuration management

use std::collections::BTreeMap;

use config::{builder::DefaultState, Config, ConfigBuilder, Environment, File};
use serde::Deserialize;

use crate::constants::DEFAULT_MAX_CONNECTIONS;
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    /// Named routes of the site: route name -> path.
    #[serde(default)]
    pub routes: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    /// Insert the demo `main_menu` on startup when it does not exist yet.
    #[serde(default)]
    pub seed_demo: bool,
    /// CORS origins, comma separated when given through the environment.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::default()
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("app.allowed_origins"),
            )
            .build()?;
        Ok(config.try_deserialize()?)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, AppError> {
        Ok(Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "menu-server")?
            .set_default("app.seed_demo", false)?
            .set_default("database.max_connections", i64::from(DEFAULT_MAX_CONNECTIONS))?
            .set_default("database.min_connections", 1)?)
    }

    /// Named routes with blank names or paths left out.
    pub fn named_routes(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.routes
            .iter()
            .map(|(name, path)| (name.trim(), path.trim()))
            .filter(|(name, path)| !name.is_empty() && !path.is_empty())
    }
}

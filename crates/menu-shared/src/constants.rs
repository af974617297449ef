//! Application-wide constants

/// Path every empty or unparsable location normalizes to.
pub const ROOT_PATH: &str = "/";
/// Href rendered for a node whose URL was never resolved.
pub const FALLBACK_URL: &str = "#";
pub const MAX_NAMED_ROUTE_LENGTH: usize = 200;
pub const MAX_EXPLICIT_URL_LENGTH: usize = 300;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

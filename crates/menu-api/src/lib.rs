//! # Menu API
//! 
//! HTTP handlers, response envelope, state and router for rendering menus.

pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;

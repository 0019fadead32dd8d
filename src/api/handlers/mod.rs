//! HTTP request handlers.

pub mod auth_handler;
pub mod case_handler;
pub mod dashboard_handler;
pub mod report_handler;

pub use auth_handler::auth_routes;

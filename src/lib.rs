//! Justice Cloud - Case management for a small law office.
//!
//! Staff log in, record cases with an optional attached document, search
//! cases by number and follow open/closed counts on a dashboard.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core entities and rules (cases, users, sessions, metrics)
//! - **services**: Use cases (authentication, cases, dashboard)
//! - **infra**: Database, repositories and attachment storage
//! - **api**: HTTP handlers, views, middleware and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server (SQLite by default)
//! cargo run -- serve
//!
//! # Use Postgres instead
//! DATABASE_BACKEND=postgres DATABASE_URL=postgres://... cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::{Config, StorageBackend};
pub use domain::{Case, DashboardMetrics, NewCase, Session, User, UserRole};
pub use errors::{AppError, AppResult};
pub use infra::{Database, LocalUploadStore};

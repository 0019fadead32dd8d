//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections, migrations and repositories
//! - Attachment storage on disk
//! - Unit of Work for repository access

pub mod db;
pub mod repositories;
pub mod unit_of_work;
pub mod uploads;

pub use db::{Database, Migrator};
pub use repositories::{CaseRepository, CaseStore, UserRepository, UserStore};
pub use unit_of_work::{Persistence, UnitOfWork};
pub use uploads::{LocalUploadStore, UploadStore};

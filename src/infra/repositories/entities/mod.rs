//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod case;
pub mod user;

//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod case_repository;
pub(crate) mod entities;
mod user_repository;

pub use case_repository::{CaseRepository, CaseStore};
pub use user_repository::{UserRepository, UserStore};

#[cfg(test)]
pub use case_repository::MockCaseRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;

//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod auth_service;
mod case_service;
pub mod container;
mod dashboard_service;

// Service Container
pub use container::{parallel, ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator, LoginOutcome, SessionClaims};
pub use case_service::{CaseManager, CaseService};
pub use dashboard_service::{DashboardReporter, DashboardService};

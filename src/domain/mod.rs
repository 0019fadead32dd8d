//! Domain layer - Core business entities and logic
//!
//! Staff accounts, cases, attachments and dashboard figures, independent
//! of storage and HTTP concerns.

pub mod case;
pub mod metrics;
pub mod password;
pub mod session;
pub mod upload;
pub mod user;

pub use case::{Case, NewCase};
pub use metrics::{closure_rate, closure_rate_precise, DashboardMetrics};
pub use password::Password;
pub use session::Session;
pub use upload::{sanitize_filename, UploadedFile};
pub use user::{User, UserRole};

//! Request-scoped login identity.

use super::UserRole;

/// Who is logged in for the current request. A denormalized copy of the
/// user's name and role taken at login time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub role: UserRole,
}

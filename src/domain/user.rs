//! User domain entity and related types.

use crate::config::{ROLE_ADMINISTRATOR, ROLE_CLERK};

/// Staff roles. Stored and displayed by their exact names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Administrator,
    Clerk,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Administrator => ROLE_ADMINISTRATOR,
            UserRole::Clerk => ROLE_CLERK,
        }
    }

    /// Parse a stored role name. Unknown values are rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            ROLE_ADMINISTRATOR => Some(UserRole::Administrator),
            ROLE_CLERK => Some(UserRole::Clerk),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Staff account. Seeded at startup and never modified afterwards.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_exact_names() {
        assert_eq!(UserRole::parse("Administrator"), Some(UserRole::Administrator));
        assert_eq!(UserRole::parse("Clerk"), Some(UserRole::Clerk));
        assert_eq!(UserRole::Administrator.to_string(), "Administrator");
    }

    #[test]
    fn test_role_parse_is_case_sensitive() {
        assert_eq!(UserRole::parse("administrator"), None);
        assert_eq!(UserRole::parse(""), None);
    }
}

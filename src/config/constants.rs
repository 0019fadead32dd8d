//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Session
// =============================================================================

/// Name of the cookie carrying the signed session token
pub const SESSION_COOKIE: &str = "justice_session";

/// Default session lifetime in hours
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 8;

/// Minimum session secret length (security requirement)
pub const MIN_SESSION_SECRET_LENGTH: usize = 32;

// =============================================================================
// User Roles
// =============================================================================

/// Administrator role
pub const ROLE_ADMINISTRATOR: &str = "Administrator";

/// Clerk role
pub const ROLE_CLERK: &str = "Clerk";

// =============================================================================
// Seeded Accounts
// =============================================================================

/// Username of the seeded administrator account
pub const SEED_ADMIN_USERNAME: &str = "admin";

/// Default password of the seeded administrator account
pub const DEFAULT_SEED_ADMIN_PASSWORD: &str = "admin123";

/// Username of the seeded clerk account
pub const SEED_CLERK_USERNAME: &str = "clerk";

/// Default password of the seeded clerk account
pub const DEFAULT_SEED_CLERK_PASSWORD: &str = "clerk123";

// =============================================================================
// Cases
// =============================================================================

/// Status value counted as an open case on the dashboard
pub const STATUS_OPEN: &str = "Open";

/// Status value counted as a closed case on the dashboard
pub const STATUS_CLOSED: &str = "Closed";

// =============================================================================
// Routes
// =============================================================================

pub const ROUTE_LOGIN: &str = "/login";
pub const ROUTE_DASHBOARD: &str = "/dashboard";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

// =============================================================================
// Storage
// =============================================================================

/// Default SQLite database file for the local backend
pub const DEFAULT_SQLITE_PATH: &str = "justice.db";

/// Default connect/acquire timeout for database connections
pub const DEFAULT_DB_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Directory served under `/static`
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Directory receiving case attachments
pub const DEFAULT_UPLOAD_DIR: &str = "static/uploads";

/// Location the report route redirects to
pub const DEFAULT_REPORT_PATH: &str = "/static/court_report.pdf";

/// Default request body limit for case submissions (16 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: u64 = 8;

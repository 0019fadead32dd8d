//! Application settings loaded from environment variables.

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::constants::{
    DEFAULT_DB_CONNECT_TIMEOUT_SECS, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_REPORT_PATH,
    DEFAULT_SEED_ADMIN_PASSWORD, DEFAULT_SEED_CLERK_PASSWORD, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT, DEFAULT_SESSION_TTL_HOURS, DEFAULT_SQLITE_PATH, DEFAULT_STATIC_DIR,
    DEFAULT_UPLOAD_DIR, MIN_SESSION_SECRET_LENGTH,
};
use crate::errors::{AppError, AppResult};

/// Which store backs the repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// Embedded single-file store, created on first connect
    Sqlite,
    /// Networked relational store, requires `DATABASE_URL`
    Postgres,
}

impl StorageBackend {
    fn parse(value: &str) -> AppResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            other => Err(AppError::config(format!(
                "unknown DATABASE_BACKEND '{}' (expected sqlite or postgres)",
                other
            ))),
        }
    }
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub backend: StorageBackend,
    pub database_url: String,
    pub db_connect_timeout: Duration,
    session_secret: String,
    pub session_ttl_hours: i64,
    pub upload_dir: PathBuf,
    pub static_dir: PathBuf,
    pub report_path: String,
    pub max_upload_bytes: usize,
    seed_admin_password: String,
    seed_clerk_password: String,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("backend", &self.backend)
            .field("database_url", &"[REDACTED]")
            .field("db_connect_timeout", &self.db_connect_timeout)
            .field("session_secret", &"[REDACTED]")
            .field("session_ttl_hours", &self.session_ttl_hours)
            .field("upload_dir", &self.upload_dir)
            .field("static_dir", &self.static_dir)
            .field("report_path", &self.report_path)
            .field("max_upload_bytes", &self.max_upload_bytes)
            .field("seed_passwords", &"[REDACTED]")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Config {
    /// Load configuration from `.env` and the process environment.
    ///
    /// # Errors
    /// See [`Config::from_lookup`].
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from a variable lookup.
    ///
    /// # Errors
    /// Returns a configuration error when the postgres backend is selected
    /// without `DATABASE_URL`, or when `SESSION_SECRET` is missing in a
    /// release build or shorter than the minimum length.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let backend = match lookup("DATABASE_BACKEND") {
            Some(value) => StorageBackend::parse(&value)?,
            None => StorageBackend::Sqlite,
        };

        let database_url = match (backend, lookup("DATABASE_URL")) {
            (_, Some(url)) => url,
            (StorageBackend::Sqlite, None) => {
                sqlite_url(Path::new(&var_or("SQLITE_PATH", DEFAULT_SQLITE_PATH)))
            }
            (StorageBackend::Postgres, None) => {
                return Err(AppError::config(
                    "DATABASE_URL must be set for the postgres backend",
                ))
            }
        };

        let session_secret = match lookup("SESSION_SECRET") {
            Some(secret) => secret,
            None if cfg!(debug_assertions) => {
                tracing::warn!("SESSION_SECRET not set, using insecure default for development");
                "dev-session-secret-minimum-32-chars!!".to_string()
            }
            None => {
                return Err(AppError::config(
                    "SESSION_SECRET environment variable must be set in production",
                ))
            }
        };

        if session_secret.len() < MIN_SESSION_SECRET_LENGTH {
            return Err(AppError::config(format!(
                "SESSION_SECRET must be at least {} characters long",
                MIN_SESSION_SECRET_LENGTH
            )));
        }

        Ok(Self {
            backend,
            database_url,
            db_connect_timeout: Duration::from_secs(parsed_or(
                &lookup,
                "DB_CONNECT_TIMEOUT_SECS",
                DEFAULT_DB_CONNECT_TIMEOUT_SECS,
            )),
            session_secret,
            session_ttl_hours: parsed_or(&lookup, "SESSION_TTL_HOURS", DEFAULT_SESSION_TTL_HOURS),
            upload_dir: var_or("UPLOAD_DIR", DEFAULT_UPLOAD_DIR).into(),
            static_dir: var_or("STATIC_DIR", DEFAULT_STATIC_DIR).into(),
            report_path: var_or("REPORT_PATH", DEFAULT_REPORT_PATH),
            max_upload_bytes: parsed_or(&lookup, "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES),
            seed_admin_password: var_or("SEED_ADMIN_PASSWORD", DEFAULT_SEED_ADMIN_PASSWORD),
            seed_clerk_password: var_or("SEED_CLERK_PASSWORD", DEFAULT_SEED_CLERK_PASSWORD),
            server_host: var_or("SERVER_HOST", DEFAULT_SERVER_HOST),
            server_port: parsed_or(&lookup, "SERVER_PORT", DEFAULT_SERVER_PORT),
        })
    }

    /// Local configuration keeping the SQLite file, static files and uploads
    /// under a single directory.
    pub fn local(root: &Path, session_secret: impl Into<String>) -> Self {
        let static_dir = root.join(DEFAULT_STATIC_DIR);
        Self {
            backend: StorageBackend::Sqlite,
            database_url: sqlite_url(&root.join(DEFAULT_SQLITE_PATH)),
            db_connect_timeout: Duration::from_secs(DEFAULT_DB_CONNECT_TIMEOUT_SECS),
            session_secret: session_secret.into(),
            session_ttl_hours: DEFAULT_SESSION_TTL_HOURS,
            upload_dir: static_dir.join("uploads"),
            static_dir,
            report_path: DEFAULT_REPORT_PATH.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            seed_admin_password: DEFAULT_SEED_ADMIN_PASSWORD.to_string(),
            seed_clerk_password: DEFAULT_SEED_CLERK_PASSWORD.to_string(),
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
        }
    }

    /// Get session secret bytes for token signing/verification.
    pub fn session_secret_bytes(&self) -> &[u8] {
        self.session_secret.as_bytes()
    }

    /// Plain-text passwords for the seeded administrator and clerk accounts.
    pub fn seed_passwords(&self) -> (&str, &str) {
        (&self.seed_admin_password, &self.seed_clerk_password)
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

/// SQLite URL that creates the file when it does not exist yet.
fn sqlite_url(path: &Path) -> String {
    format!("sqlite://{}?mode=rwc", path.display())
}

fn parsed_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    lookup(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn load(vars: &[(&str, &str)]) -> AppResult<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_to_sqlite_file() {
        let config = load(&[("SESSION_SECRET", SECRET)]).unwrap();

        assert_eq!(config.backend, StorageBackend::Sqlite);
        assert_eq!(config.database_url, "sqlite://justice.db?mode=rwc");
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.session_ttl_hours, 8);
        assert_eq!(config.upload_dir, PathBuf::from("static/uploads"));
    }

    #[test]
    fn test_sqlite_path_override() {
        let config = load(&[("SESSION_SECRET", SECRET), ("SQLITE_PATH", "/var/lib/cases.db")]).unwrap();
        assert_eq!(config.database_url, "sqlite:///var/lib/cases.db?mode=rwc");
    }

    #[test]
    fn test_postgres_requires_database_url() {
        let err = load(&[("SESSION_SECRET", SECRET), ("DATABASE_BACKEND", "postgres")]).unwrap_err();
        assert!(matches!(err, AppError::Config(msg) if msg.contains("DATABASE_URL")));

        let config = load(&[
            ("SESSION_SECRET", SECRET),
            ("DATABASE_BACKEND", "postgres"),
            ("DATABASE_URL", "postgres://court@db/justice"),
        ])
        .unwrap();
        assert_eq!(config.backend, StorageBackend::Postgres);
        assert_eq!(config.database_url, "postgres://court@db/justice");
    }

    #[test]
    fn test_short_session_secret_rejected() {
        let err = load(&[("SESSION_SECRET", "too-short")]).unwrap_err();
        assert!(matches!(err, AppError::Config(msg) if msg.contains("at least 32")));

        assert!(load(&[("SESSION_SECRET", &SECRET[..31])]).is_err());
        assert!(load(&[("SESSION_SECRET", SECRET)]).is_ok());
    }

    #[test]
    fn test_unparsable_numbers_fall_back() {
        let config = load(&[
            ("SESSION_SECRET", SECRET),
            ("SERVER_PORT", "not-a-port"),
            ("MAX_UPLOAD_BYTES", "1024"),
        ])
        .unwrap();

        assert_eq!(config.server_port, 5000);
        assert_eq!(config.max_upload_bytes, 1024);
    }

    #[test]
    fn test_backend_parse() {
        assert_eq!(StorageBackend::parse("sqlite").unwrap(), StorageBackend::Sqlite);
        assert_eq!(StorageBackend::parse(" Postgres ").unwrap(), StorageBackend::Postgres);
        assert!(StorageBackend::parse("mysql").is_err());
    }

    #[test]
    fn test_local_config_layout() {
        let config = Config::local(Path::new("/srv/justice"), "x".repeat(32));

        assert_eq!(config.backend, StorageBackend::Sqlite);
        assert_eq!(config.database_url, "sqlite:///srv/justice/justice.db?mode=rwc");
        assert_eq!(config.upload_dir, PathBuf::from("/srv/justice/static/uploads"));
        assert_eq!(config.seed_passwords(), ("admin123", "clerk123"));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = Config::local(Path::new("/tmp"), "super-secret-session-key-0123456789");
        let debug = format!("{:?}", config);

        assert!(!debug.contains("super-secret"));
        assert!(!debug.contains("admin123"));
        assert!(debug.contains("[REDACTED]"));
    }
}

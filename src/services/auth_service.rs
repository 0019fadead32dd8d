//! Authentication service - Login, session tokens and account seeding.
//!
//! Sessions are stateless: the session cookie carries a signed token holding
//! the username and role. Logging out only drops the cookie.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::{Config, SEED_ADMIN_USERNAME, SEED_CLERK_USERNAME};
use crate::domain::{Password, Session, User, UserRole};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Hash verified when the username is unknown, so both failure paths cost
/// one Argon2 verification.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$Fz0v3mH7E0z0Tk1Zr4q6p8lq3aB2c9dXJxGq0YbWm5s";

/// Signed session token payload
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Username
    pub sub: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Result of a successful login
#[derive(Debug)]
pub struct LoginOutcome {
    pub session: Session,
    /// Value for the session cookie
    pub token: String,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check credentials and open a session.
    ///
    /// Fails with `InvalidCredentials` when no account matches.
    async fn login(&self, username: &str, password: &str) -> AppResult<LoginOutcome>;

    /// Verify a session token and recover the session it carries
    fn verify_session(&self, token: &str) -> AppResult<Session>;

    /// Create the administrator and clerk accounts if they are missing
    async fn seed_default_accounts(&self) -> AppResult<()>;
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    config: Config,
}

impl<U: UnitOfWork> Authenticator<U> {
    /// Create new auth service instance with Unit of Work
    pub fn new(uow: Arc<U>, config: Config) -> Self {
        Self { uow, config }
    }

    fn issue_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.config.session_ttl_hours);

        let claims = SessionClaims {
            sub: user.username.clone(),
            role: user.role.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.session_secret_bytes()),
        )?;

        Ok(token)
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn login(&self, username: &str, password: &str) -> AppResult<LoginOutcome> {
        let user = self.uow.users().find_by_username(username).await?;

        let stored = Password::from_hash(
            user.as_ref()
                .map(|u| u.password_hash.clone())
                .unwrap_or_else(|| DUMMY_HASH.to_string()),
        );
        let password_valid = stored.verify(password);

        let user = match user {
            Some(user) if password_valid => user,
            _ => {
                tracing::warn!(username, "Failed login attempt");
                return Err(AppError::InvalidCredentials);
            }
        };

        let token = self.issue_token(&user)?;
        tracing::info!(username = %user.username, role = %user.role, "User logged in");

        Ok(LoginOutcome {
            session: Session {
                username: user.username,
                role: user.role,
            },
            token,
        })
    }

    fn verify_session(&self, token: &str) -> AppResult<Session> {
        let data = decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(self.config.session_secret_bytes()),
            &Validation::default(),
        )?;

        let role = UserRole::parse(&data.claims.role).ok_or(AppError::Unauthorized)?;

        Ok(Session {
            username: data.claims.sub,
            role,
        })
    }

    async fn seed_default_accounts(&self) -> AppResult<()> {
        let (admin_password, clerk_password) = self.config.seed_passwords();
        let accounts = [
            (SEED_ADMIN_USERNAME, admin_password, UserRole::Administrator),
            (SEED_CLERK_USERNAME, clerk_password, UserRole::Clerk),
        ];

        for (username, password, role) in accounts {
            let hash = Password::new(password)?.into_string();
            if self.uow.users().insert_if_absent(username, hash, role).await? {
                tracing::info!(username, %role, "Seeded default account");
            }
        }

        Ok(())
    }
}

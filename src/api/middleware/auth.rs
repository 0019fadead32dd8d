//! Session cookie middleware.

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::api::AppState;
use crate::config::{ROUTE_LOGIN, SESSION_COOKIE};
use crate::domain::Session;
use crate::errors::AppError;

/// Logged-in identity for the current request, placed in the request
/// extensions by [`session_middleware`].
#[derive(Clone, Debug)]
pub struct CurrentSession(pub Session);

/// Session middleware.
///
/// Verifies the session cookie and injects the [`CurrentSession`] into the
/// request extensions. Requests without a valid session are redirected to
/// the login page.
pub async fn session_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let session = jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| state.auth_service.verify_session(cookie.value()).ok());

    match session {
        Some(session) => {
            request.extensions_mut().insert(CurrentSession(session));
            next.run(request).await
        }
        None => Redirect::to(ROUTE_LOGIN).into_response(),
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for CurrentSession {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentSession>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

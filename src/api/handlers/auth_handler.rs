//! Login and logout handlers.

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use validator::Validate;

use crate::api::extractors::ValidatedForm;
use crate::api::{views, AppState};
use crate::config::{ROUTE_DASHBOARD, ROUTE_LOGIN, SESSION_COOKIE};
use crate::errors::{AppError, AppResult};

/// Login form submission
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/login", get(login_form).post(login))
        .route("/logout", get(logout))
}

async fn root() -> Redirect {
    Redirect::to(ROUTE_LOGIN)
}

pub async fn login_form() -> impl IntoResponse {
    views::login_page()
}

/// Check credentials and start a session.
///
/// Wrong credentials render the plain form again, without a cookie or any
/// message saying which part was wrong.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedForm(form): ValidatedForm<LoginForm>,
) -> AppResult<Response> {
    let outcome = match state.auth_service.login(&form.username, &form.password).await {
        Ok(outcome) => outcome,
        Err(AppError::InvalidCredentials) => {
            return Ok(views::login_page().into_response());
        }
        Err(e) => return Err(e),
    };

    let cookie = Cookie::build((SESSION_COOKIE, outcome.token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/");

    Ok((jar.add(cookie), Redirect::to(ROUTE_DASHBOARD)).into_response())
}

/// Drop the session cookie. Tokens are not tracked server-side.
pub async fn logout(jar: CookieJar) -> (CookieJar, Redirect) {
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    (jar, Redirect::to(ROUTE_LOGIN))
}

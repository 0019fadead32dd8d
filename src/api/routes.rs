//! Application route configuration.

use axum::{
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    middleware,
    routing::get,
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use super::handlers::{auth_routes, case_handler, dashboard_handler, report_handler};
use super::middleware::session_middleware;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        // Public routes
        .merge(auth_routes())
        .route("/health", get(health))
        .nest_service("/static", static_files)
        // Everything below requires a session
        .merge(
            protected_routes()
                .route_layer(middleware::from_fn_with_state(state.clone(), session_middleware)),
        )
        // Global middleware
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard_handler::dashboard))
        .route(
            "/add_case",
            get(case_handler::add_case_form).post(case_handler::add_case),
        )
        .route("/view_cases", get(case_handler::view_cases))
        .route("/report", get(report_handler::report))
}

/// Health check with database connectivity
async fn health(State(state): State<AppState>) -> (StatusCode, &'static str) {
    match state.database.ping().await {
        Ok(()) => (StatusCode::OK, "healthy"),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
        }
    }
}

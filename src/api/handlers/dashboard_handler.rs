//! Dashboard handler.

use axum::{extract::State, response::Html};

use crate::api::middleware::CurrentSession;
use crate::api::{views, AppState};
use crate::errors::AppResult;

pub async fn dashboard(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> AppResult<Html<String>> {
    let metrics = state.dashboard_service.metrics().await?;

    Ok(views::dashboard_page(&session, &metrics))
}

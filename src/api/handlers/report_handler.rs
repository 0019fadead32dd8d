//! Court report handler.

use axum::{extract::State, response::Redirect};

use crate::api::AppState;

/// Send the client to the static report file.
pub async fn report(State(state): State<AppState>) -> Redirect {
    Redirect::to(&state.config.report_path)
}

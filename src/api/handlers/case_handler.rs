//! Case handlers.

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
};
use serde::Deserialize;
use validator::Validate;

use crate::api::extractors::CaseSubmission;
use crate::api::middleware::CurrentSession;
use crate::api::{views, AppState};
use crate::config::ROUTE_DASHBOARD;
use crate::domain::NewCase;
use crate::errors::{AppError, AppResult};

/// Case creation form
#[derive(Debug, Deserialize, Validate)]
pub struct CaseForm {
    #[validate(length(min = 1, max = 255, message = "Case number must be 1-255 characters"))]
    pub case_number: String,
    #[validate(length(min = 1, max = 255, message = "Client name must be 1-255 characters"))]
    pub client_name: String,
    #[validate(length(max = 255, message = "Case type must be at most 255 characters"))]
    pub case_type: String,
    #[validate(length(max = 255, message = "Hearing date must be at most 255 characters"))]
    pub hearing_date: String,
    #[validate(length(max = 255, message = "Status must be at most 255 characters"))]
    pub status: String,
}

impl CaseForm {
    /// Build the form from decoded multipart text fields.
    pub(crate) fn from_fields(mut fields: HashMap<String, String>) -> AppResult<Self> {
        let mut take = |name: &str| {
            fields
                .remove(name)
                .ok_or_else(|| AppError::validation(format!("{} is required", name)))
        };

        Ok(Self {
            case_number: take("case_number")?,
            client_name: take("client_name")?,
            case_type: take("case_type")?,
            hearing_date: take("hearing_date")?,
            status: take("status")?,
        })
    }
}

impl From<CaseForm> for NewCase {
    fn from(form: CaseForm) -> Self {
        Self {
            case_number: form.case_number,
            client_name: form.client_name,
            case_type: form.case_type,
            hearing_date: form.hearing_date,
            status: form.status,
        }
    }
}

/// Query string of the case listing
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

pub async fn add_case_form() -> Html<String> {
    views::add_case_page()
}

/// Store a new case and its attachment, then return to the dashboard.
pub async fn add_case(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    submission: CaseSubmission,
) -> AppResult<Redirect> {
    let case = state
        .case_service
        .create_case(submission.form.into(), submission.file)
        .await?;

    tracing::debug!(case_id = case.id, user = %session.username, "Case submitted");

    Ok(Redirect::to(ROUTE_DASHBOARD))
}

/// List cases, filtered by a case-number substring when `search` is set.
pub async fn view_cases(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Html<String>> {
    let search = params.search.as_deref();
    let cases = state.case_service.list_cases(search).await?;

    Ok(views::cases_page(&cases, search))
}

//! Case submission extractor - Form fields plus an optional attachment.

use std::collections::HashMap;

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
};
use validator::Validate;

use super::validated_form::ValidatedForm;
use crate::api::handlers::case_handler::CaseForm;
use crate::domain::UploadedFile;
use crate::errors::AppError;

/// Multipart part carrying the attachment
const FILE_FIELD: &str = "file";

/// A case-creation request.
///
/// Accepts `multipart/form-data` (the add-case page, with an optional
/// `file` part) or a plain URL-encoded form without attachment. A file part
/// with an empty filename counts as no attachment.
#[derive(Debug)]
pub struct CaseSubmission {
    pub form: CaseForm,
    pub file: Option<UploadedFile>,
}

#[async_trait]
impl<S> FromRequest<S> for CaseSubmission
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("multipart/form-data"));

        if !is_multipart {
            let ValidatedForm(form) = ValidatedForm::<CaseForm>::from_request(req, state).await?;
            return Ok(Self { form, file: None });
        }

        let mut multipart = Multipart::from_request(req, state).await?;

        let mut fields = HashMap::new();
        let mut file = None;

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();

            if name == FILE_FIELD {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;

                if !file_name.is_empty() {
                    file = Some(UploadedFile::new(file_name, bytes.to_vec()));
                }
            } else {
                fields.insert(name, field.text().await?);
            }
        }

        let form = CaseForm::from_fields(fields)?;
        form.validate()?;

        Ok(Self { form, file })
    }
}

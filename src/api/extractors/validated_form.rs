//! URL-encoded form extractor with validation.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Form,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// A decoded form that has passed its `validator` rules.
///
/// Decoding fails on a missing field, so an absent field is reported by
/// name instead of being read as empty.
pub struct ValidatedForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, AppError> {
        let Form(form) = Form::<T>::from_request(req, state).await?;
        form.validate()?;
        Ok(Self(form))
    }
}

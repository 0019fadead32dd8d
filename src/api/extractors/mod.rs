//! Custom request extractors.

mod case_submission;
mod validated_form;

pub use case_submission::CaseSubmission;
pub use validated_form::ValidatedForm;

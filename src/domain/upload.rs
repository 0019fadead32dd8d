//! Case attachments and filename sanitization.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::errors::{AppError, AppResult};

/// Anything outside this set is dropped from stored filenames.
static UNSAFE_FILENAME_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_.-]").expect("filename pattern is valid"));

/// A file attached to a case submission, as received from the client.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub original_name: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for UploadedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadedFile")
            .field("original_name", &self.original_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl UploadedFile {
    pub fn new(original_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            original_name: original_name.into(),
            bytes,
        }
    }

    /// The name this file is stored under.
    ///
    /// # Errors
    /// Returns a validation error when nothing usable is left after sanitizing.
    pub fn stored_name(&self) -> AppResult<String> {
        sanitize_filename(&self.original_name).ok_or_else(|| {
            AppError::validation(format!(
                "Attachment name '{}' is not a valid filename",
                self.original_name
            ))
        })
    }
}

/// Reduce a client-supplied filename to a flat, traversal-free name.
///
/// Accented letters are decomposed to their ASCII base and other non-ASCII
/// characters dropped. Path separators become word breaks, whitespace runs
/// become `_`, characters outside `[A-Za-z0-9_.-]` are removed and
/// leading/trailing `.`/`_` are trimmed. Returns `None` when the result is empty.
pub fn sanitize_filename(raw: &str) -> Option<String> {
    let ascii: String = raw.nfkd().filter(char::is_ascii).collect();
    let flattened = ascii.replace(['/', '\\'], " ");
    let joined = flattened.split_whitespace().collect::<Vec<_>>().join("_");
    let cleaned = UNSAFE_FILENAME_CHARS.replace_all(&joined, "");
    let trimmed = cleaned.trim_matches(|c| c == '.' || c == '_');

    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

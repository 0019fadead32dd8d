//! Legal case entity.

/// A recorded case. Hearing date and status are free text; the dashboard
/// only gives meaning to the `Open` and `Closed` statuses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    pub id: i32,
    pub case_number: String,
    pub client_name: String,
    pub case_type: String,
    pub hearing_date: String,
    pub status: String,
    /// Stored filename of the attachment, empty when there is none
    pub document: String,
}

impl Case {
    /// Attachment filename, if the case has one.
    pub fn attachment(&self) -> Option<&str> {
        (!self.document.is_empty()).then_some(self.document.as_str())
    }
}

/// Data for a case that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCase {
    pub case_number: String,
    pub client_name: String,
    pub case_type: String,
    pub hearing_date: String,
    pub status: String,
}

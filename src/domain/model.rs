use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Form fields, named after their keys in the stored request document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    ToName,
    ToEmail,
    Subject,
    BodyTemplate,
    Body,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::ToName => "to_name",
            FormField::ToEmail => "to_email",
            FormField::Subject => "subject",
            FormField::BodyTemplate => "body_template",
            FormField::Body => "body",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle of a request document. The client only ever writes `Requested`;
/// `Sent` is set by downstream processing outside this system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Requested,
    Sent,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Requested => "requested",
            RequestStatus::Sent => "sent",
        }
    }
}

/// The payload persisted on a successful submission. Created once, never
/// mutated by this system afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub to_name: String,
    pub to_email: String,
    pub subject: String,
    pub body: String,
    pub request_status: RequestStatus,
    pub request_time: DateTime<Utc>,
    pub sent_time: Option<DateTime<Utc>>,
    pub msg_url: Option<String>,
}

impl SubmissionRecord {
    pub fn new(
        to_name: impl Into<String>,
        to_email: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            to_name: to_name.into(),
            to_email: to_email.into(),
            subject: subject.into(),
            body: body.into(),
            request_status: RequestStatus::Requested,
            request_time: Utc::now(),
            sent_time: None,
            msg_url: None,
        }
    }
}

/// Immutable snapshot of the form. Updated only through
/// [`FormState::apply`](crate::core::form) transitions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub to_name: Option<String>,
    pub to_email: Option<String>,
    pub subject: Option<String>,
    pub body_template: Option<String>,
    pub body_html: String,
}

/// A single user interaction with the form. `None` selections mean the
/// field was cleared.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    NameSelected(Option<String>),
    EmailSelected(Option<String>),
    SubjectSelected(Option<String>),
    BodyTemplateSelected(Option<String>),
    BodyEdited(String),
}

/// One document from the recipient suggestion collection. Either field may
/// be missing on a given document.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipientSuggestion {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Prior values for each form field, used for autocomplete.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestionLists {
    pub names: Vec<String>,
    pub emails: Vec<String>,
    pub subjects: Vec<String>,
    pub body_templates: Vec<String>,
}

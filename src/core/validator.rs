//! Submission gate: the three recipient fields must be present and
//! non-empty before a record is built. Checked in a fixed order, first
//! failure wins, so the user sees one message at a time.

use crate::domain::model::{FormField, FormState};
use crate::utils::error::{FormError, Result};

/// Requires name, email and subject, in that order. A field fails when it
/// is unset or its value has length zero; values are not trimmed, so a
/// whitespace-only subject passes. Body template and body are never
/// required.
pub fn validate(form: &FormState) -> Result<()> {
    require(FormField::ToName, &form.to_name, "Please enter a name")?;
    require(
        FormField::ToEmail,
        &form.to_email,
        "Please enter an email address",
    )?;
    require(
        FormField::Subject,
        &form.subject,
        "Please enter a subject line",
    )?;
    Ok(())
}

fn require(field: FormField, value: &Option<String>, message: &str) -> Result<()> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(()),
        _ => Err(FormError::ValidationError {
            field,
            message: message.to_string(),
        }),
    }
}

//! One-shot assembly of the autocomplete lists from a suggestion source.

use crate::domain::model::SuggestionLists;
use crate::domain::ports::SuggestionSource;
use crate::utils::error::Result;

/// Reads all three suggestion collections once and assembles the per-field
/// lists. Name and email are mapped independently from the recipient
/// collection, so a document carrying only one of the two fields still
/// contributes to that field's list.
pub async fn load_suggestions<S: SuggestionSource>(source: &S) -> Result<SuggestionLists> {
    let recipients = source.recipient_suggestions().await?;
    let names: Vec<String> = recipients.iter().filter_map(|r| r.name.clone()).collect();
    let emails: Vec<String> = recipients.iter().filter_map(|r| r.email.clone()).collect();

    let subjects = source.subject_suggestions().await?;
    let body_templates = source.body_suggestions().await?;

    tracing::debug!(
        names = names.len(),
        emails = emails.len(),
        subjects = subjects.len(),
        body_templates = body_templates.len(),
        "suggestion lists loaded"
    );

    Ok(SuggestionLists {
        names,
        emails,
        subjects,
        body_templates,
    })
}

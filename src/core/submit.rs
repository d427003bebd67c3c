//! Submission pipeline: validate the form, normalize the body, build the
//! record and hand it to the store. One write per call, no retry.

use crate::core::normalizer::normalize;
use crate::core::validator::validate;
use crate::domain::model::{FormState, SubmissionRecord};
use crate::domain::ports::SubmissionStore;
use crate::utils::error::Result;

/// Message shown to the user after a successful submission.
pub const SUCCESS_MESSAGE: &str = "Your form has been successfully submitted!";

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub document_id: String,
    pub message: String,
}

pub struct SubmissionPipeline<S: SubmissionStore> {
    store: S,
}

impl<S: SubmissionStore> SubmissionPipeline<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Runs the full submission flow for one form snapshot.
    ///
    /// Validation failures abort before anything is written; backend
    /// failures surface the store's error, with nothing to roll back.
    pub async fn submit(&self, form: &FormState) -> Result<SubmissionReceipt> {
        validate(form)?;

        let body = normalize(&form.body_html);
        // validate() guarantees the three required fields are present
        let record = SubmissionRecord::new(
            form.to_name.clone().unwrap_or_default(),
            form.to_email.clone().unwrap_or_default(),
            form.subject.clone().unwrap_or_default(),
            body,
        );

        tracing::debug!(
            to_name = %record.to_name,
            subject = %record.subject,
            body_len = record.body.len(),
            "submitting request"
        );

        let document_id = self.store.submit(&record).await?;
        tracing::info!(%document_id, "request document written");

        Ok(SubmissionReceipt {
            document_id,
            message: SUCCESS_MESSAGE.to_string(),
        })
    }
}

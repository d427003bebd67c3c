use crate::domain::model::{RecipientSuggestion, SubmissionRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn project_id(&self) -> &str;
    fn database_id(&self) -> &str;
    fn auth_token(&self) -> Option<&str>;
}

/// Read-only source of prior field values. One request per call, no
/// subscriptions.
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    async fn recipient_suggestions(&self) -> Result<Vec<RecipientSuggestion>>;
    async fn subject_suggestions(&self) -> Result<Vec<String>>;
    async fn body_suggestions(&self) -> Result<Vec<String>>;
}

/// Accepts one record per validated submission and returns the new
/// document id. Fire-and-forget: no read-back, no transaction.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn submit(&self, record: &SubmissionRecord) -> Result<String>;
}

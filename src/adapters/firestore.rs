//! Firestore REST client. Speaks the v1 document API directly: one GET
//! per suggestion collection, one POST per submitted request.

use crate::domain::model::{RecipientSuggestion, SubmissionRecord};
use crate::domain::ports::{ConfigProvider, SubmissionStore, SuggestionSource};
use crate::utils::error::{FormError, Result};
use async_trait::async_trait;
use chrono::SecondsFormat;
use reqwest::Client;
use serde_json::{json, Value};

pub const DEFAULT_API_ENDPOINT: &str = "https://firestore.googleapis.com/v1";
pub const DEFAULT_DATABASE_ID: &str = "(default)";

/// Collection names, as used by the stored documents.
pub const TO_SUGGESTIONS: &str = "to_suggestions";
pub const SUBJECT_SUGGESTIONS: &str = "subject_suggestions";
pub const BODY_SUGGESTIONS: &str = "body_suggestions";
pub const REQUESTS: &str = "requests";

pub struct FirestoreClient {
    client: Client,
    documents_url: String,
    auth_token: Option<String>,
}

impl FirestoreClient {
    pub fn new(config: &impl ConfigProvider) -> Self {
        let documents_url = format!(
            "{}/projects/{}/databases/{}/documents",
            config.api_endpoint().trim_end_matches('/'),
            config.project_id(),
            config.database_id()
        );
        Self {
            client: Client::new(),
            documents_url,
            auth_token: config.auth_token().map(str::to_owned),
        }
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}", self.documents_url, collection)
    }

    fn with_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Lists a collection and returns each document's `fields` map. An
    /// empty collection comes back without a `documents` key.
    async fn list_documents(&self, collection: &str) -> Result<Vec<Value>> {
        let url = self.collection_url(collection);
        tracing::debug!(%url, "listing collection");

        let response = self.with_auth(self.client.get(&url)).send().await?;
        let status = response.status();
        tracing::debug!(%collection, %status, "list response");

        if !status.is_success() {
            return Err(FormError::BackendError {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let body: Value = response.json().await?;
        let documents = match body.get("documents").and_then(Value::as_array) {
            Some(documents) => documents
                .iter()
                .filter_map(|doc| doc.get("fields").cloned())
                .collect(),
            None => Vec::new(),
        };
        Ok(documents)
    }

    /// Creates a document and returns its id, the last segment of the
    /// resource name Firestore assigns.
    async fn create_document(&self, collection: &str, fields: Value) -> Result<String> {
        let url = self.collection_url(collection);
        tracing::debug!(%url, "creating document");

        let response = self
            .with_auth(self.client.post(&url))
            .json(&json!({ "fields": fields }))
            .send()
            .await?;
        let status = response.status();
        tracing::debug!(%collection, %status, "create response");

        if !status.is_success() {
            return Err(FormError::BackendError {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let body: Value = response.json().await?;
        let name = body.get("name").and_then(Value::as_str).ok_or_else(|| {
            FormError::BackendError {
                status: status.as_u16(),
                message: "create response carried no document name".to_string(),
            }
        })?;
        Ok(document_id(name).to_string())
    }
}

#[async_trait]
impl SuggestionSource for FirestoreClient {
    async fn recipient_suggestions(&self) -> Result<Vec<RecipientSuggestion>> {
        let documents = self.list_documents(TO_SUGGESTIONS).await?;
        Ok(documents
            .iter()
            .map(|fields| RecipientSuggestion {
                name: string_field(fields, "name"),
                email: string_field(fields, "email"),
            })
            .collect())
    }

    async fn subject_suggestions(&self) -> Result<Vec<String>> {
        let documents = self.list_documents(SUBJECT_SUGGESTIONS).await?;
        Ok(documents
            .iter()
            .filter_map(|fields| string_field(fields, "subject"))
            .collect())
    }

    async fn body_suggestions(&self) -> Result<Vec<String>> {
        let documents = self.list_documents(BODY_SUGGESTIONS).await?;
        Ok(documents
            .iter()
            .filter_map(|fields| string_field(fields, "body"))
            .collect())
    }
}

#[async_trait]
impl SubmissionStore for FirestoreClient {
    async fn submit(&self, record: &SubmissionRecord) -> Result<String> {
        self.create_document(REQUESTS, encode_record(record)).await
    }
}

/// Extracts a Firestore string value; non-string and missing fields are
/// skipped rather than treated as errors.
fn string_field(fields: &Value, key: &str) -> Option<String> {
    fields
        .get(key)?
        .get("stringValue")?
        .as_str()
        .map(str::to_owned)
}

fn document_id(resource_name: &str) -> &str {
    resource_name
        .rsplit('/')
        .next()
        .unwrap_or(resource_name)
}

/// Encodes a record as Firestore typed values.
fn encode_record(record: &SubmissionRecord) -> Value {
    json!({
        "to_name": { "stringValue": record.to_name },
        "to_email": { "stringValue": record.to_email },
        "subject": { "stringValue": record.subject },
        "body": { "stringValue": record.body },
        "request_status": { "stringValue": record.request_status.as_str() },
        "request_time": {
            "timestampValue": record.request_time.to_rfc3339_opts(SecondsFormat::Micros, true)
        },
        "sent_time": { "nullValue": null },
        "msg_url": { "nullValue": null },
    })
}

use httpmock::prelude::*;
use leave_sender::domain::model::{FormEvent, FormState};
use leave_sender::{FirestoreClient, FormError, SubmissionPipeline, TomlConfig};

fn test_config(endpoint: &str, auth_token: Option<&str>) -> TomlConfig {
    let token_line = match auth_token {
        Some(token) => format!("auth_token = \"{}\"\n", token),
        None => String::new(),
    };
    let toml = format!(
        "[backend]\nendpoint = \"{}\"\nproject_id = \"test-project\"\n{}",
        endpoint, token_line
    );
    TomlConfig::from_toml_str(&toml).unwrap()
}

fn filled_form() -> FormState {
    FormState::default()
        .apply(FormEvent::NameSelected(Some("Alice".into())))
        .apply(FormEvent::EmailSelected(Some("a@x.com".into())))
        .apply(FormEvent::SubjectSelected(Some("Leave".into())))
        .apply(FormEvent::BodyEdited("<p>Hello</p><p>World</p>".into()))
}

#[tokio::test]
async fn test_end_to_end_submission() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/projects/test-project/databases/(default)/documents/requests")
            .json_body_partial(
                r#"
                {
                    "fields": {
                        "to_name": { "stringValue": "Alice" },
                        "to_email": { "stringValue": "a@x.com" },
                        "subject": { "stringValue": "Leave" },
                        "body": { "stringValue": "Hello<br>World" },
                        "request_status": { "stringValue": "requested" },
                        "sent_time": { "nullValue": null },
                        "msg_url": { "nullValue": null }
                    }
                }"#,
            );
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "name": "projects/test-project/databases/(default)/documents/requests/abc123",
                "createTime": "2023-06-01T08:00:00Z",
                "updateTime": "2023-06-01T08:00:00Z"
            }));
    });

    let config = test_config(&server.base_url(), None);
    let pipeline = SubmissionPipeline::new(FirestoreClient::new(&config));

    let receipt = pipeline.submit(&filled_form()).await.unwrap();

    api_mock.assert();
    assert_eq!(receipt.document_id, "abc123");
    assert_eq!(receipt.message, "Your form has been successfully submitted!");
}

#[tokio::test]
async fn test_auth_token_is_sent_as_bearer_header() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/projects/test-project/databases/(default)/documents/requests")
            .header("authorization", "Bearer test-token");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "name": "projects/test-project/databases/(default)/documents/requests/doc1"
            }));
    });

    let config = test_config(&server.base_url(), Some("test-token"));
    let pipeline = SubmissionPipeline::new(FirestoreClient::new(&config));

    let receipt = pipeline.submit(&filled_form()).await.unwrap();

    api_mock.assert();
    assert_eq!(receipt.document_id, "doc1");
}

#[tokio::test]
async fn test_validation_failure_performs_no_write() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/projects/test-project/databases/(default)/documents/requests");
        then.status(200);
    });

    let config = test_config(&server.base_url(), None);
    let pipeline = SubmissionPipeline::new(FirestoreClient::new(&config));

    // name is missing; email and subject are also unset but the name
    // check fires first
    let form = FormState::default().apply(FormEvent::BodyEdited("<p>Hello</p>".into()));
    let err = pipeline.submit(&form).await.unwrap_err();

    assert_eq!(err.to_string(), "Please enter a name");
    api_mock.assert_hits(0);
}

#[tokio::test]
async fn test_backend_failure_surfaces_status_and_message() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/projects/test-project/databases/(default)/documents/requests");
        then.status(403).body("permission denied");
    });

    let config = test_config(&server.base_url(), None);
    let pipeline = SubmissionPipeline::new(FirestoreClient::new(&config));

    let err = pipeline.submit(&filled_form()).await.unwrap_err();

    api_mock.assert();
    assert!(matches!(err, FormError::BackendError { status: 403, .. }));
    assert!(err.to_string().contains("permission denied"));
}

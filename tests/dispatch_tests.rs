//! Request dispatch against a mock transport: body policy, key injection,
//! envelope handling and error mapping.

mod common;

use common::{
    MockTransport, RecordedBody, RecordedPart, TEST_API_KEY, TEST_BASE_URL, mock_client,
};
use elasticemail_rs::{
    ApiResponse, Client, DEFAULT_TIMEOUT, Error, Method, Params, Request, Transport,
};
use serde_json::json;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

// =============================================================================
// Body Policy
// =============================================================================

#[tokio::test]
async fn test_post_sends_form_body_with_key_last() {
    let mock = MockTransport::new();
    let client = mock_client(&mock);

    let request = Request::post("accesstoken/add")
        .param("tokenName", "deploy")
        .param("accessLevel", 4u64);
    client.dispatch(request).await.unwrap();

    let sent = mock.single_request();
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.target(), "accesstoken/add");
    assert_eq!(
        sent.form(),
        pairs(&[
            ("tokenName", "deploy"),
            ("accessLevel", "4"),
            ("apikey", TEST_API_KEY),
        ])
    );
}

#[tokio::test]
async fn test_absent_params_are_not_transmitted() {
    let mock = MockTransport::new();
    let client = mock_client(&mock);

    let params = Params::new()
        .set("listName", "Newsletter")
        .set("newListName", None::<String>)
        .set_list("emails", Vec::<String>::new());
    client
        .dispatch(Request::post("list/update").params_from(params))
        .await
        .unwrap();

    let sent = mock.single_request();
    assert_eq!(
        sent.form(),
        pairs(&[("listName", "Newsletter"), ("apikey", TEST_API_KEY)])
    );
}

#[tokio::test]
async fn test_caller_apikey_is_replaced_in_place() {
    let mock = MockTransport::new();
    let client = mock_client(&mock);

    let request = Request::post("account/load")
        .param("apikey", "caller-key")
        .param("limit", 10);
    client.dispatch(request).await.unwrap();

    let sent = mock.single_request();
    assert_eq!(
        sent.form(),
        pairs(&[("apikey", TEST_API_KEY), ("limit", "10")])
    );
}

#[tokio::test]
async fn test_post_without_params_still_sends_key_as_form() {
    let mock = MockTransport::new();
    let client = mock_client(&mock);

    client.dispatch(Request::post("account/load")).await.unwrap();

    let sent = mock.single_request();
    assert!(!sent.url.contains('?'));
    assert_eq!(sent.form(), pairs(&[("apikey", TEST_API_KEY)]));
}

#[tokio::test]
async fn test_get_uses_query_string() {
    let mock = MockTransport::new();
    let client = mock_client(&mock);

    let request = Request::get("log/load")
        .param("channelName", "spring sale")
        .param("email", "a+b@example.com");
    client.dispatch(request).await.unwrap();

    let sent = mock.single_request();
    assert_eq!(sent.method, Method::Get);
    assert_eq!(sent.body, RecordedBody::Empty);
    assert!(sent.target().starts_with("log/load?"));
    assert_eq!(
        sent.query(),
        pairs(&[
            ("channelName", "spring sale"),
            ("email", "a+b@example.com"),
            ("apikey", TEST_API_KEY),
        ])
    );
}

#[tokio::test]
async fn test_get_appends_to_existing_query() {
    let mock = MockTransport::new();
    let client = mock_client(&mock);

    client
        .dispatch(Request::get("export/list?format=csv").param("limit", 5))
        .await
        .unwrap();

    let sent = mock.single_request();
    assert_eq!(sent.url.matches('?').count(), 1);
    assert!(sent.target().starts_with("export/list?format=csv&limit=5&apikey="));
}

#[tokio::test]
async fn test_post_with_attachments_is_multipart() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("report.csv");
    let second = dir.path().join("logo.png");
    std::fs::write(&first, "name,email\nAda,ada@example.com\n").unwrap();
    std::fs::File::create(&second)
        .unwrap()
        .write_all(&[0x89, b'P', b'N', b'G'])
        .unwrap();

    let mock = MockTransport::new();
    let client = mock_client(&mock);

    let request = Request::post("email/send")
        .param("subject", "Report")
        .param("to", "a@example.com;b@example.com")
        .param("channel", None::<String>)
        .attachment(&first)
        .attachment(&second);
    client.dispatch(request).await.unwrap();

    let sent = mock.single_request();
    assert_eq!(
        sent.part_names(),
        vec!["file_0", "file_1", "subject", "to", "apikey"]
    );
    match &sent.parts()[0] {
        RecordedPart::File {
            file_name,
            len,
            content,
            ..
        } => {
            assert_eq!(file_name, "report.csv");
            assert_eq!(*len, 31);
            assert_eq!(content, b"name,email\nAda,ada@example.com\n");
        }
        other => panic!("expected file part, got {other:?}"),
    }
    match &sent.parts()[1] {
        RecordedPart::File {
            file_name, content, ..
        } => {
            assert_eq!(file_name, "logo.png");
            assert_eq!(content, &[0x89, b'P', b'N', b'G']);
        }
        other => panic!("expected file part, got {other:?}"),
    }
    assert_eq!(sent.param("to").as_deref(), Some("a@example.com;b@example.com"));
    assert_eq!(sent.param("apikey").as_deref(), Some(TEST_API_KEY));
    assert!(!sent.url.contains('?'));
}

#[tokio::test]
async fn test_get_ignores_attachments() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("ignored.txt");
    std::fs::write(&file, "x").unwrap();

    let mock = MockTransport::new();
    let client = mock_client(&mock);

    client
        .dispatch(Request::get("file/listall").attachment(&file))
        .await
        .unwrap();

    let sent = mock.single_request();
    assert_eq!(sent.body, RecordedBody::Empty);
    assert_eq!(sent.query(), pairs(&[("apikey", TEST_API_KEY)]));
}

// =============================================================================
// Validation
// =============================================================================

#[tokio::test]
async fn test_unknown_method_fails_before_io() {
    let mock = MockTransport::new();
    let client = mock_client(&mock);

    let err = client
        .send_request("account/load", Params::new(), "DELETE", Vec::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidMethod(ref m) if m == "DELETE"));
    assert_eq!(err.to_string(), "Unallowed request method type: DELETE");
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_method_name_is_case_insensitive() {
    let mock = MockTransport::new();
    let client = mock_client(&mock);

    client
        .send_request("account/load", Params::new(), "post", Vec::new())
        .await
        .unwrap();
    client
        .send_request("account/load", Params::new(), "Get", Vec::new())
        .await
        .unwrap();

    let methods: Vec<_> = mock.requests().iter().map(|r| r.method).collect();
    assert_eq!(methods, vec![Method::Post, Method::Get]);
}

#[tokio::test]
async fn test_empty_path_is_rejected() {
    let mock = MockTransport::new();
    let client = mock_client(&mock);

    let err = client.dispatch(Request::post("")).await.unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_missing_attachment_sends_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.pdf");

    let mock = MockTransport::new();
    let client = mock_client(&mock);

    let err = client
        .dispatch(Request::post("file/upload").attachment(&missing))
        .await
        .unwrap_err();

    match err {
        Error::Attachment { path, source } => {
            assert_eq!(path, missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Attachment, got {other:?}"),
    }
    assert_eq!(mock.call_count(), 0);
}

// =============================================================================
// Envelope Handling
// =============================================================================

#[tokio::test]
async fn test_data_is_unwrapped() {
    let mock = MockTransport::new();
    mock.push_data(json!({"Email": "owner@example.com", "Credit": 12.5}));
    let client = mock_client(&mock);

    let response = client.dispatch(Request::post("account/load")).await.unwrap();
    assert_eq!(
        response,
        ApiResponse::Payload(json!({"Email": "owner@example.com", "Credit": 12.5}))
    );
}

#[tokio::test]
async fn test_missing_null_or_false_data_keeps_envelope() {
    let mock = MockTransport::new();
    mock.push_json(json!({"success": true}));
    mock.push_json(json!({"success": true, "data": null}));
    mock.push_json(json!({"success": true, "data": false}));
    let client = mock_client(&mock);

    for _ in 0..3 {
        let response = client.dispatch(Request::post("contact/delete")).await.unwrap();
        let envelope = response.envelope().expect("envelope variant");
        assert!(envelope.success);
    }
}

#[tokio::test]
async fn test_zero_and_empty_data_are_payloads() {
    let mock = MockTransport::new();
    mock.push_data(json!(0));
    mock.push_data(json!(""));
    mock.push_data(json!([]));
    let client = mock_client(&mock);

    for expected in [json!(0), json!(""), json!([])] {
        let response = client.dispatch(Request::post("list/add")).await.unwrap();
        assert_eq!(response.into_payload(), Some(expected));
    }
}

#[tokio::test]
async fn test_failure_envelope_is_api_error() {
    let mock = MockTransport::new();
    mock.push_api_error("Incorrect apikey");
    let client = mock_client(&mock);

    let err = client.dispatch(Request::post("account/load")).await.unwrap_err();
    assert!(matches!(err, Error::Api(ref m) if m == "Incorrect apikey"));
    assert_eq!(err.api_message(), Some("Incorrect apikey"));
    assert!(!err.is_transport());
}

#[tokio::test]
async fn test_failure_envelope_on_error_status_is_api_error() {
    let mock = MockTransport::new();
    mock.push_raw(400, r#"{"success":false,"error":"Invalid domain"}"#);
    let client = mock_client(&mock);

    let err = client.dispatch(Request::post("domain/add")).await.unwrap_err();
    assert!(matches!(err, Error::Api(ref m) if m == "Invalid domain"));
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let mock = MockTransport::new();
    mock.push_raw(200, "<html>maintenance</html>");
    mock.push_raw(200, r#"{"data": 1}"#);
    let client = mock_client(&mock);

    for _ in 0..2 {
        let err = client.dispatch(Request::post("account/load")).await.unwrap_err();
        assert!(matches!(err, Error::Decode(_)), "got {err:?}");
    }
}

#[tokio::test]
async fn test_error_status_without_envelope_is_http_status() {
    let mock = MockTransport::new();
    mock.push_raw(503, "Service Unavailable");
    let client = mock_client(&mock);

    let err = client.dispatch(Request::post("account/load")).await.unwrap_err();
    match &err {
        Error::HttpStatus {
            status_code,
            message,
        } => {
            assert_eq!(*status_code, 503);
            assert_eq!(message, "Service Unavailable");
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
    assert!(err.is_transport());
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_transport_failure_propagates() {
    let mock = MockTransport::new();
    mock.push_error(Error::Timeout(Duration::from_secs(5)));
    let client = mock_client(&mock);

    let err = client.dispatch(Request::post("account/load")).await.unwrap_err();
    assert!(matches!(err, Error::Timeout(d) if d == Duration::from_secs(5)));
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_default_timeout_reaches_transport() {
    let mock = MockTransport::new();
    let client = mock_client(&mock);

    client.dispatch(Request::post("account/load")).await.unwrap();
    assert_eq!(mock.timeouts(), vec![DEFAULT_TIMEOUT]);
}

#[tokio::test]
async fn test_configured_timeout_reaches_transport() {
    let mock = MockTransport::new();
    let client = Client::builder(TEST_API_KEY)
        .base_url(TEST_BASE_URL)
        .timeout(Duration::from_millis(750))
        .transport(Arc::clone(&mock) as Arc<dyn Transport>)
        .build()
        .unwrap();

    client.dispatch(Request::get("account/load")).await.unwrap();
    client.dispatch(Request::post("account/load")).await.unwrap();
    assert_eq!(mock.timeouts(), vec![Duration::from_millis(750); 2]);
}

#[tokio::test]
async fn test_no_retry_after_failure() {
    let mock = MockTransport::new();
    mock.push_raw(502, "Bad Gateway");
    let client = mock_client(&mock);

    assert!(client.dispatch(Request::post("account/load")).await.is_err());
    assert_eq!(mock.call_count(), 1);
}

// =============================================================================
// Concurrency
// =============================================================================

#[tokio::test]
async fn test_clones_dispatch_concurrently() {
    let mock = MockTransport::with_delay(Duration::from_millis(50));
    let client = mock_client(&mock);

    let started = std::time::Instant::now();
    let calls = (0..8).map(|i| {
        let client = client.clone();
        let request = Request::post("contact/loadcontact").param("email", format!("{i}@x.io"));
        async move { client.dispatch(request).await }
    });
    let results = futures_util::future::join_all(calls).await;

    assert!(results.iter().all(Result::is_ok));
    assert_eq!(mock.call_count(), 8);
    assert!(started.elapsed() < Duration::from_millis(400));
}

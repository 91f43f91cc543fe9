//! Common test utilities shared across all integration test files.
//!
//! Usage in test files:
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! [`MockTransport`] stands in for the network: it records every request the
//! dispatcher produces (reading file parts into memory) and answers with
//! queued responses.

use async_trait::async_trait;
use elasticemail_rs::{
    Client, Error, HttpRequest, Method, Part, RawResponse, RequestBody, Transport,
};
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::env;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::AsyncReadExt;

/// API key used by mock clients.
#[allow(dead_code)]
pub const TEST_API_KEY: &str = "test-key-0000";

/// Base URL used by mock clients.
#[allow(dead_code)]
pub const TEST_BASE_URL: &str = "https://api.test/v2/";

/// Creates a live client from the ELASTICEMAIL_API_KEY environment variable.
/// Returns None if the API key is not set.
#[allow(dead_code)]
pub fn get_client() -> Option<Client> {
    env::var("ELASTICEMAIL_API_KEY")
        .ok()
        .and_then(|key| Client::builder(key).build().ok())
}

/// Creates a client that sends through `mock`.
#[allow(dead_code)]
pub fn mock_client(mock: &Arc<MockTransport>) -> Client {
    Client::builder(TEST_API_KEY)
        .base_url(TEST_BASE_URL)
        .transport(Arc::clone(mock) as Arc<dyn Transport>)
        .build()
        .expect("mock client builds")
}

// =============================================================================
// Timeout Utilities
// =============================================================================

/// Default timeout for tests against the live API.
#[allow(dead_code)]
pub const TEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Wraps a future with a timeout, panicking if the timeout is exceeded.
#[allow(dead_code)]
pub async fn with_timeout<F, T>(duration: Duration, future: F) -> T
where
    F: Future<Output = T>,
{
    tokio::time::timeout(duration, future)
        .await
        .unwrap_or_else(|_| panic!("Test timed out after {duration:?}"))
}

// =============================================================================
// Recorded Requests
// =============================================================================

/// A request as it reached the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub body: RecordedBody,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordedBody {
    Empty,
    /// Decoded form pairs, in wire order.
    Form(Vec<(String, String)>),
    Multipart(Vec<RecordedPart>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordedPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        len: u64,
        content: Vec<u8>,
    },
}

#[allow(dead_code)]
impl RecordedRequest {
    /// Path and query relative to [`TEST_BASE_URL`].
    pub fn target(&self) -> &str {
        self.url.strip_prefix(TEST_BASE_URL).unwrap_or(&self.url)
    }

    /// Decoded query pairs.
    pub fn query(&self) -> Vec<(String, String)> {
        self.url
            .split_once('?')
            .map(|(_, query)| decode_pairs(query))
            .unwrap_or_default()
    }

    /// Form pairs, or an empty list for other bodies.
    pub fn form(&self) -> Vec<(String, String)> {
        match &self.body {
            RecordedBody::Form(pairs) => pairs.clone(),
            _ => Vec::new(),
        }
    }

    /// Looks a parameter up in the form body, the multipart text parts or the query.
    pub fn param(&self, name: &str) -> Option<String> {
        let from_body = match &self.body {
            RecordedBody::Form(pairs) => find(pairs, name),
            RecordedBody::Multipart(parts) => parts.iter().find_map(|part| match part {
                RecordedPart::Text { name: n, value } if n == name => Some(value.clone()),
                _ => None,
            }),
            RecordedBody::Empty => None,
        };
        from_body.or_else(|| find(&self.query(), name))
    }

    pub fn parts(&self) -> &[RecordedPart] {
        match &self.body {
            RecordedBody::Multipart(parts) => parts,
            _ => &[],
        }
    }

    /// Names of the multipart parts, in wire order.
    pub fn part_names(&self) -> Vec<&str> {
        self.parts()
            .iter()
            .map(|part| match part {
                RecordedPart::Text { name, .. } | RecordedPart::File { name, .. } => name.as_str(),
            })
            .collect()
    }
}

fn find(pairs: &[(String, String)], name: &str) -> Option<String> {
    pairs.iter().find(|(k, _)| k == name).map(|(_, v)| v.clone())
}

/// Decodes `a=1&b=2` into pairs.
pub fn decode_pairs(encoded: &str) -> Vec<(String, String)> {
    encoded
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (
                urlencoding::decode(k).expect("valid key").into_owned(),
                urlencoding::decode(v).expect("valid value").into_owned(),
            )
        })
        .collect()
}

// =============================================================================
// Mock Transport
// =============================================================================

/// Records requests and replays queued responses.
///
/// When the queue is empty it answers `{"success": true}`.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<RawResponse, Error>>>,
    requests: Mutex<Vec<RecordedRequest>>,
    timeouts: Mutex<Vec<Duration>>,
    delay: Option<Duration>,
}

#[allow(dead_code)]
impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A transport that waits `delay` before answering each request.
    pub fn with_delay(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            delay: Some(delay),
            ..Self::default()
        })
    }

    /// Queues a raw response.
    pub fn push_raw(&self, status: u16, body: impl Into<String>) {
        self.push_result(Ok(RawResponse::new(status, body.into())));
    }

    /// Queues a `200` response with a JSON body.
    pub fn push_json(&self, body: Value) {
        self.push_raw(200, body.to_string());
    }

    /// Queues a successful envelope carrying `data`.
    pub fn push_data(&self, data: Value) {
        self.push_json(json!({"success": true, "data": data}));
    }

    /// Queues a failure envelope.
    pub fn push_api_error(&self, message: &str) {
        self.push_json(json!({"success": false, "error": message}));
    }

    /// Queues a transport failure.
    pub fn push_error(&self, error: Error) {
        self.push_result(Err(error));
    }

    fn push_result(&self, result: Result<RawResponse, Error>) {
        self.responses
            .lock()
            .expect("responses lock")
            .push_back(result);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    /// The only recorded request. Panics unless exactly one was made.
    pub fn single_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected one request, got {requests:#?}");
        requests.into_iter().next().expect("one request")
    }

    /// Timeouts the dispatcher passed along, one per request.
    pub fn timeouts(&self) -> Vec<Duration> {
        self.timeouts.lock().expect("timeouts lock").clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().expect("requests lock").len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(
        &self,
        request: HttpRequest,
        timeout: Duration,
    ) -> Result<RawResponse, Error> {
        let HttpRequest { method, url, body } = request;
        let body = match body {
            RequestBody::Empty => RecordedBody::Empty,
            RequestBody::Form(encoded) => RecordedBody::Form(decode_pairs(&encoded)),
            RequestBody::Multipart(parts) => {
                let mut recorded = Vec::with_capacity(parts.len());
                for part in parts {
                    recorded.push(match part {
                        Part::Text { name, value } => RecordedPart::Text { name, value },
                        Part::File(mut file) => {
                            let mut content = Vec::new();
                            file.file
                                .read_to_end(&mut content)
                                .await
                                .map_err(|e| Error::Transport(e.to_string()))?;
                            RecordedPart::File {
                                name: file.name,
                                file_name: file.file_name,
                                len: file.len,
                                content,
                            }
                        }
                    });
                }
                RecordedBody::Multipart(recorded)
            }
        };

        self.requests
            .lock()
            .expect("requests lock")
            .push(RecordedRequest { method, url, body });
        self.timeouts.lock().expect("timeouts lock").push(timeout);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let next = self.responses.lock().expect("responses lock").pop_front();
        next.unwrap_or_else(|| Ok(RawResponse::new(200, r#"{"success":true}"#)))
    }
}

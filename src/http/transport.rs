//! The HTTP transport seam.
//!
//! The dispatcher never talks to `reqwest` directly: it hands a fully encoded
//! [`HttpRequest`] to a [`Transport`] and gets back the status and raw body.
//! [`ReqwestTransport`] is the production implementation; tests inject a
//! recording fake.

use super::common::Method;
use crate::errors::Error;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client as ReqwestClient;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart;
use std::fmt::Debug;
use std::time::Duration;
use tokio_util::io::ReaderStream;

/// Content type of form-encoded POST bodies.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A fully encoded request, ready to go on the wire.
#[derive(Debug)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute URL, query string included.
    pub url: String,
    pub body: RequestBody,
}

/// Request body shapes the dispatcher produces.
#[derive(Debug)]
pub enum RequestBody {
    /// No body (GET, or POST without parameters).
    Empty,
    /// `application/x-www-form-urlencoded` body, already encoded.
    Form(String),
    /// `multipart/form-data` parts, in transmission order.
    Multipart(Vec<Part>),
}

impl RequestBody {
    /// Short name used in log lines.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            RequestBody::Empty => "empty",
            RequestBody::Form(_) => "form",
            RequestBody::Multipart(_) => "multipart",
        }
    }
}

/// One multipart field.
#[derive(Debug)]
pub enum Part {
    Text { name: String, value: String },
    File(FilePart),
}

impl Part {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Part::Text { name, .. } => name,
            Part::File(file) => &file.name,
        }
    }
}

/// A file field whose content is streamed from an open handle.
#[derive(Debug)]
pub struct FilePart {
    /// Field name (`file_0`, `file_1`, ...).
    pub name: String,
    /// Base name of the source path, sent as the part's filename.
    pub file_name: String,
    pub file: tokio::fs::File,
    /// File length in bytes.
    pub len: u64,
}

/// Status code and body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Bytes,
}

impl RawResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns `true` for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes encoded requests.
///
/// Implementations report network-level failures as errors and return every
/// completed exchange (whatever its status) as a [`RawResponse`].
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    /// Sends one request, giving up after `timeout`.
    async fn execute(&self, request: HttpRequest, timeout: Duration)
    -> Result<RawResponse, Error>;
}

/// [`Transport`] backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: ReqwestClient,
}

impl ReqwestTransport {
    #[must_use]
    pub fn new(http_client: ReqwestClient) -> Self {
        Self { http_client }
    }

    /// Builds a transport with a default `reqwest` client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClientBuild`] if the TLS backend cannot be initialized.
    pub fn try_default() -> Result<Self, Error> {
        let http_client = ReqwestClient::builder()
            .build()
            .map_err(|e| Error::ClientBuild(e.to_string()))?;
        Ok(Self::new(http_client))
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(
        &self,
        request: HttpRequest,
        timeout: Duration,
    ) -> Result<RawResponse, Error> {
        let HttpRequest { method, url, body } = request;

        let builder = self
            .http_client
            .request(method.into(), &url)
            .timeout(timeout);

        let builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Form(encoded) => {
                builder.header(CONTENT_TYPE, FORM_CONTENT_TYPE).body(encoded)
            }
            RequestBody::Multipart(parts) => builder.multipart(build_form(parts)),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| map_reqwest_error(e, timeout))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| map_reqwest_error(e, timeout))?;

        Ok(RawResponse { status, body })
    }
}

fn build_form(parts: Vec<Part>) -> multipart::Form {
    parts
        .into_iter()
        .fold(multipart::Form::new(), |form, part| match part {
            Part::Text { name, value } => form.text(name, value),
            Part::File(FilePart {
                name,
                file_name,
                file,
                len,
            }) => {
                let body = reqwest::Body::wrap_stream(ReaderStream::new(file));
                form.part(
                    name,
                    multipart::Part::stream_with_length(body, len).file_name(file_name),
                )
            }
        })
}

/// GET requests carry the API key in the URL, so it is stripped from the error.
fn map_reqwest_error(error: reqwest::Error, timeout: Duration) -> Error {
    if error.is_timeout() {
        Error::Timeout(timeout)
    } else {
        Error::Http(error.without_url())
    }
}

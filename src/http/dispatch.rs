//! The request dispatcher shared by every resource method.
//!
//! A [`Request`] names an endpoint, a method, its parameters and optional
//! attachments. [`Dispatcher::dispatch`] turns it into one HTTP exchange:
//!
//! 1. `apikey` is set to the configured key (replacing any caller value).
//! 2. The body is chosen by a fixed policy:
//!    - POST with attachments: multipart, file parts `file_0..file_n` first,
//!      then one text part per present parameter
//!    - POST with parameters: URL-encoded form body
//!    - anything else: parameters go in the query string
//! 3. The `{success, error, data}` envelope is decoded and unwrapped into an
//!    [`ApiResponse`], or an [`Error::Api`] carrying the server's message.
//!
//! Parameters whose value is absent are never transmitted.

use super::common::{API_KEY_PARAM, Method, append_query, encode_pairs, resolve_url};
use super::error_helpers::{check_raw, decode_envelope};
use super::loud_wire;
use super::transport::{FilePart, HttpRequest, Part, RawResponse, RequestBody, Transport};
use crate::client::Configuration;
use crate::errors::Error;
use crate::params::{IntoParam, Params};
use crate::response::ApiResponse;
use bytes::Bytes;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// One API call: endpoint path, method, parameters and attachments.
///
/// # Example
///
/// ```
/// use elasticemail_rs::{Method, Request};
///
/// let request = Request::post("accesstoken/add")
///     .param("tokenName", "deploy")
///     .param("expires", None::<String>);
/// assert_eq!(request.method(), Method::Post);
/// assert_eq!(request.params().get("tokenName"), Some("deploy"));
///
/// assert!(Request::new("account/load", "DELETE").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    path: String,
    method: Method,
    params: Params,
    attachments: Vec<PathBuf>,
}

impl Request {
    /// Creates a request from a method name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMethod`] unless `method` is `GET` or `POST`
    /// (case-insensitive).
    pub fn new(path: impl Into<String>, method: &str) -> Result<Self, Error> {
        Ok(Self::with_method(path, method.parse()?))
    }

    #[must_use]
    pub fn with_method(path: impl Into<String>, method: Method) -> Self {
        Self {
            path: path.into(),
            method,
            params: Params::new(),
            attachments: Vec::new(),
        }
    }

    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::with_method(path, Method::Post)
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::with_method(path, Method::Get)
    }

    /// Replaces all parameters.
    #[must_use]
    pub fn params_from(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl IntoParam) -> Self {
        self.params.insert(key, value);
        self
    }

    /// Adds one attachment. Only used for POST requests.
    #[must_use]
    pub fn attachment(mut self, path: impl Into<PathBuf>) -> Self {
        self.attachments.push(path.into());
        self
    }

    #[must_use]
    pub fn attachments<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.attachments.extend(paths.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    #[must_use]
    pub const fn params(&self) -> &Params {
        &self.params
    }

    #[must_use]
    pub fn attachment_paths(&self) -> &[PathBuf] {
        &self.attachments
    }
}

/// Executes [`Request`]s against the configured base URL.
///
/// Holds only read-only state; clones share the configuration and transport
/// and can dispatch concurrently.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    config: Arc<Configuration>,
    transport: Arc<dyn Transport>,
}

impl Dispatcher {
    #[must_use]
    pub fn new(config: Arc<Configuration>, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    #[must_use]
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Sends one request and unwraps the response envelope.
    ///
    /// Attachments are opened before anything is sent and closed when the
    /// call returns.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`] for an empty path
    /// - [`Error::Attachment`] if an attachment cannot be opened
    /// - [`Error::Http`], [`Error::Timeout`], [`Error::Transport`] or
    ///   [`Error::HttpStatus`] for transport failures
    /// - [`Error::Decode`] if the body is not an envelope
    /// - [`Error::Api`] if the envelope reports `success: false`
    pub async fn dispatch(&self, request: Request) -> Result<ApiResponse, Error> {
        let (path, raw) = self.exchange(request).await?;

        let envelope = decode_envelope(raw.status, &raw.body)?;
        if !envelope.success {
            let message = envelope.error.unwrap_or_default();
            tracing::warn!("API rejected '{}': {}", path, message);
            return Err(Error::Api(message));
        }

        let response = ApiResponse::from(envelope);
        tracing::debug!(
            path = %path,
            payload = response.is_payload(),
            "Request completed"
        );
        Ok(response)
    }

    /// Sends one request and returns the body as-is.
    ///
    /// Used by endpoints that answer with file content instead of an
    /// envelope. A failure envelope is still reported as [`Error::Api`].
    ///
    /// # Errors
    ///
    /// Same as [`dispatch`](Self::dispatch), except that a successful body is
    /// never decoded.
    pub async fn dispatch_raw(&self, request: Request) -> Result<Bytes, Error> {
        let (path, raw) = self.exchange(request).await?;
        check_raw(raw.status, &raw.body)
            .inspect_err(|e| tracing::warn!("Download from '{}' failed: {}", path, e))?;
        tracing::debug!(path = %path, bytes = raw.body.len(), "Download completed");
        Ok(raw.body)
    }

    async fn exchange(&self, request: Request) -> Result<(String, RawResponse), Error> {
        let Request {
            path,
            method,
            mut params,
            attachments,
        } = request;

        if path.is_empty() {
            return Err(Error::InvalidInput(
                "request path must not be empty".to_string(),
            ));
        }

        params.insert(API_KEY_PARAM, self.config.api_key());

        let (target, body) = encode(method, &path, &params, &attachments).await?;
        let url = resolve_url(self.config.base_url(), &target);

        tracing::debug!(
            method = %method,
            path = %path,
            body = body.kind(),
            attachments = attachments.len(),
            "Dispatching request"
        );

        let request_id = loud_wire::next_request_id();
        loud_wire::log_request(request_id, method.as_str(), &url, &body);

        let raw = self
            .transport
            .execute(HttpRequest { method, url, body }, self.config.timeout())
            .await
            .inspect_err(|e| tracing::warn!("Request to '{}' failed: {}", path, e))?;

        loud_wire::log_response_status(request_id, raw.status);
        loud_wire::log_response_body(request_id, &raw.body);

        Ok((path, raw))
    }
}

/// Applies the body policy, returning the (possibly query-extended) path and the body.
async fn encode(
    method: Method,
    path: &str,
    params: &Params,
    attachments: &[PathBuf],
) -> Result<(String, RequestBody), Error> {
    if method == Method::Post && !attachments.is_empty() {
        let mut parts = open_attachments(attachments).await?;
        parts.extend(params.present().map(|(name, value)| Part::Text {
            name: name.to_string(),
            value: value.to_string(),
        }));
        return Ok((path.to_string(), RequestBody::Multipart(parts)));
    }

    if method == Method::Post && params.has_present() {
        return Ok((
            path.to_string(),
            RequestBody::Form(encode_pairs(params.present())),
        ));
    }

    Ok((
        append_query(path, &encode_pairs(params.present())),
        RequestBody::Empty,
    ))
}

async fn open_attachments(attachments: &[PathBuf]) -> Result<Vec<Part>, Error> {
    let mut parts = Vec::with_capacity(attachments.len());
    for (index, path) in attachments.iter().enumerate() {
        let attachment_error = |source| Error::Attachment {
            path: path.clone(),
            source,
        };
        let file = tokio::fs::File::open(path)
            .await
            .map_err(attachment_error)?;
        let len = file.metadata().await.map_err(attachment_error)?.len();

        parts.push(Part::File(FilePart {
            name: format!("file_{index}"),
            file_name: base_name(path),
            file,
            len,
        }));
    }
    Ok(parts)
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_request_new_validates_method() {
        assert_eq!(
            Request::new("account/load", "get").unwrap().method(),
            Method::Get
        );
        let err = Request::new("account/load", "PUT").unwrap_err();
        assert!(matches!(err, Error::InvalidMethod(ref m) if m == "PUT"));
    }

    #[test]
    fn test_request_builders() {
        let request = Request::post("email/send")
            .params_from(Params::new().set("subject", "Hi"))
            .param("to", "a@x.com")
            .attachment("/tmp/a.txt")
            .attachments(["/tmp/b.txt"]);
        assert_eq!(request.path(), "email/send");
        assert_eq!(request.params().len(), 2);
        assert_eq!(request.attachment_paths().len(), 2);
    }

    #[tokio::test]
    async fn test_encode_get_uses_query() {
        let params = Params::new().set("a", "1").set("b", None::<String>);
        let (target, body) = encode(Method::Get, "x/y", &params, &[]).await.unwrap();
        assert_eq!(target, "x/y?a=1");
        assert!(matches!(body, RequestBody::Empty));
    }

    #[tokio::test]
    async fn test_encode_post_uses_form() {
        let params = Params::new().set("a", "1 2");
        let (target, body) = encode(Method::Post, "x/y", &params, &[]).await.unwrap();
        assert_eq!(target, "x/y");
        assert!(matches!(body, RequestBody::Form(ref f) if f == "a=1%202"));
    }

    #[tokio::test]
    async fn test_encode_post_without_params_has_no_body() {
        let params = Params::new().set("a", None::<String>);
        let (target, body) = encode(Method::Post, "x/y", &params, &[]).await.unwrap();
        assert_eq!(target, "x/y");
        assert!(matches!(body, RequestBody::Empty));
    }

    #[tokio::test]
    async fn test_encode_get_ignores_attachments() {
        let params = Params::new().set("a", "1");
        let missing = PathBuf::from("/definitely/not/here.txt");
        let (target, body) = encode(Method::Get, "x", &params, &[missing])
            .await
            .unwrap();
        assert_eq!(target, "x?a=1");
        assert!(matches!(body, RequestBody::Empty));
    }

    #[tokio::test]
    async fn test_encode_multipart_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name,email\n").unwrap();
        let params = Params::new().set("listName", "News").set("skip", None::<String>);

        let (_, body) = encode(Method::Post, "contact/upload", &params, &[file
            .path()
            .to_path_buf()])
        .await
        .unwrap();

        let RequestBody::Multipart(parts) = body else {
            panic!("expected multipart body");
        };
        let names: Vec<_> = parts.iter().map(Part::name).collect();
        assert_eq!(names, vec!["file_0", "listName"]);
        let Part::File(file_part) = &parts[0] else {
            panic!("expected file part first");
        };
        assert_eq!(file_part.len, 11);
        assert_eq!(file_part.file_name, base_name(file.path()));
    }

    #[tokio::test]
    async fn test_missing_attachment_is_error() {
        let missing = PathBuf::from("/definitely/not/here.csv");
        let err = encode(Method::Post, "file/upload", &Params::new(), &[missing.clone()])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Attachment { ref path, .. } if *path == missing));
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name(Path::new("/tmp/dir/report.pdf")), "report.pdf");
        assert_eq!(base_name(Path::new("invite.csv")), "invite.csv");
    }
}

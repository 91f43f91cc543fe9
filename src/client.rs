use crate::api::{
    AccessTokenApi, AccountApi, CampaignApi, ChannelApi, ContactApi, DomainApi, EmailApi,
    ExportApi, FileApi, ListApi, LogApi, SegmentApi, SmsApi, TemplateApi,
};
use crate::errors::Error;
use crate::http::common::DEFAULT_BASE_URL;
use crate::http::dispatch::{Dispatcher, Request};
use crate::http::transport::{ReqwestTransport, Transport};
use crate::params::Params;
use crate::response::ApiResponse;
use reqwest::Client as ReqwestClient;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "ELASTICEMAIL_API_KEY";
/// Environment variable overriding the base URL.
pub const ENV_API_URL: &str = "ELASTICEMAIL_API_URL";
/// Environment variable overriding the timeout, in (fractional) seconds.
pub const ENV_TIMEOUT_SECS: &str = "ELASTICEMAIL_TIMEOUT_SECS";

/// Settings shared by every call a [`Client`] makes.
///
/// `Debug` output never includes the API key.
#[derive(Clone)]
pub struct Configuration {
    api_key: String,
    base_url: String,
    timeout: Duration,
    transport: Option<Arc<dyn Transport>>,
}

impl Configuration {
    /// Creates a configuration with the default base URL and timeout.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            transport: None,
        }
    }

    /// Reads the configuration from `ELASTICEMAIL_API_KEY`,
    /// `ELASTICEMAIL_API_URL` and `ELASTICEMAIL_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the key is missing or the timeout
    /// is not a positive number of seconds.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let api_key = lookup(ENV_API_KEY)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::InvalidInput(format!("{ENV_API_KEY} is not set")))?;

        let mut config = Self::new(api_key);
        if let Some(base_url) = lookup(ENV_API_URL).filter(|url| !url.is_empty()) {
            config.set_base_url(base_url);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let timeout = raw
                .trim()
                .parse::<f64>()
                .ok()
                .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
                .filter(|timeout| !timeout.is_zero())
                .ok_or_else(|| {
                    Error::InvalidInput(format!("{ENV_TIMEOUT_SECS} is not a duration: {raw:?}"))
                })?;
            config.set_timeout(timeout);
        }
        Ok(config)
    }

    pub fn set_api_key(&mut self, api_key: impl Into<String>) -> &mut Self {
        self.api_key = api_key.into();
        self
    }

    /// Sets the base URL. Endpoint paths are appended verbatim, so it should
    /// end with `/`.
    pub fn set_base_url(&mut self, base_url: impl Into<String>) -> &mut Self {
        self.base_url = base_url.into();
        self
    }

    pub fn set_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.timeout = timeout;
        self
    }

    pub fn set_transport(&mut self, transport: Arc<dyn Transport>) -> &mut Self {
        self.transport = Some(transport);
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.set_base_url(base_url);
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.set_timeout(timeout);
        self
    }

    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.set_transport(transport);
        self
    }

    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub fn transport(&self) -> Option<&Arc<dyn Transport>> {
        self.transport.as_ref()
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("transport", &self.transport)
            .finish()
    }
}

/// The main client for the Elastic Email API.
///
/// Cheap to clone; clones share configuration and transport.
#[derive(Debug, Clone)]
pub struct Client {
    config: Arc<Configuration>,
    dispatcher: Dispatcher,
}

/// Builder for `Client` instances.
///
/// # Example
///
/// ```
/// use elasticemail_rs::Client;
/// use std::time::Duration;
///
/// let client = Client::builder("api_key")
///     .timeout(Duration::from_secs(30))
///     .connect_timeout(Duration::from_secs(5))
///     .build()
///     .unwrap();
/// assert_eq!(client.configuration().timeout(), Duration::from_secs(30));
/// ```
#[derive(Debug)]
pub struct ClientBuilder {
    config: Configuration,
    connect_timeout: Option<Duration>,
}

impl ClientBuilder {
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.set_base_url(base_url);
        self
    }

    /// Sets the per-request timeout (default 5 seconds).
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.set_timeout(timeout);
        self
    }

    /// Sets the connection timeout of the underlying `reqwest` client.
    ///
    /// Ignored when a custom transport is supplied.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Uses a custom transport instead of `reqwest`.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.config.set_transport(transport);
        self
    }

    /// Builds the `Client`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClientBuild`] if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<Client, Error> {
        let transport: Arc<dyn Transport> = match self.config.transport() {
            Some(transport) => Arc::clone(transport),
            None => {
                let mut builder = ReqwestClient::builder();
                if let Some(connect_timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(connect_timeout);
                }
                let http_client = builder
                    .build()
                    .map_err(|e| Error::ClientBuild(e.to_string()))?;
                Arc::new(ReqwestTransport::new(http_client))
            }
        };

        let config = Arc::new(self.config);
        Ok(Client {
            dispatcher: Dispatcher::new(Arc::clone(&config), transport),
            config,
        })
    }
}

impl Client {
    /// Creates a new builder for `Client` instances.
    #[must_use]
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder {
            config: Configuration::new(api_key),
            connect_timeout: None,
        }
    }

    /// Creates a client from an existing configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClientBuild`] if no transport is configured and the
    /// default HTTP client cannot be constructed.
    pub fn new(config: Configuration) -> Result<Self, Error> {
        ClientBuilder {
            config,
            connect_timeout: None,
        }
        .build()
    }

    /// Creates a client from the `ELASTICEMAIL_*` environment variables.
    ///
    /// # Errors
    ///
    /// See [`Configuration::from_env`] and [`Client::new`].
    pub fn from_env() -> Result<Self, Error> {
        Self::new(Configuration::from_env()?)
    }

    /// Returns a client that shares this configuration but sends through `transport`.
    #[must_use]
    pub fn with_transport(&self, transport: Arc<dyn Transport>) -> Self {
        let config =
            Arc::new(Configuration::clone(&self.config).with_transport(Arc::clone(&transport)));
        Self {
            dispatcher: Dispatcher::new(Arc::clone(&config), transport),
            config,
        }
    }

    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    #[must_use]
    pub const fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Dispatches a request to an arbitrary endpoint.
    ///
    /// # Errors
    ///
    /// See [`Dispatcher::dispatch`].
    pub async fn dispatch(&self, request: Request) -> Result<ApiResponse, Error> {
        self.dispatcher.dispatch(request).await
    }

    /// Dispatches a call given as path, parameters, method name and attachments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMethod`] before any I/O unless `method` is
    /// `GET` or `POST`; otherwise see [`Dispatcher::dispatch`].
    pub async fn send_request(
        &self,
        path: &str,
        params: Params,
        method: &str,
        attachments: Vec<PathBuf>,
    ) -> Result<ApiResponse, Error> {
        let request = Request::new(path, method)?
            .params_from(params)
            .attachments(attachments);
        self.dispatch(request).await
    }

    #[must_use]
    pub const fn access_token(&self) -> AccessTokenApi<'_> {
        AccessTokenApi::new(self)
    }

    #[must_use]
    pub const fn account(&self) -> AccountApi<'_> {
        AccountApi::new(self)
    }

    #[must_use]
    pub const fn campaign(&self) -> CampaignApi<'_> {
        CampaignApi::new(self)
    }

    #[must_use]
    pub const fn channel(&self) -> ChannelApi<'_> {
        ChannelApi::new(self)
    }

    #[must_use]
    pub const fn contact(&self) -> ContactApi<'_> {
        ContactApi::new(self)
    }

    #[must_use]
    pub const fn domain(&self) -> DomainApi<'_> {
        DomainApi::new(self)
    }

    #[must_use]
    pub const fn email(&self) -> EmailApi<'_> {
        EmailApi::new(self)
    }

    #[must_use]
    pub const fn export(&self) -> ExportApi<'_> {
        ExportApi::new(self)
    }

    #[must_use]
    pub const fn file(&self) -> FileApi<'_> {
        FileApi::new(self)
    }

    #[must_use]
    pub const fn list(&self) -> ListApi<'_> {
        ListApi::new(self)
    }

    #[must_use]
    pub const fn log(&self) -> LogApi<'_> {
        LogApi::new(self)
    }

    #[must_use]
    pub const fn segment(&self) -> SegmentApi<'_> {
        SegmentApi::new(self)
    }

    #[must_use]
    pub const fn sms(&self) -> SmsApi<'_> {
        SmsApi::new(self)
    }

    #[must_use]
    pub const fn template(&self) -> TemplateApi<'_> {
        TemplateApi::new(self)
    }
}

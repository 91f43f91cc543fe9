//! An async client for the Elastic Email v2 HTTP API.
//!
//! Every call goes through one [`Dispatcher`]: it adds the API key, picks a
//! query string, form or multipart body, and unwraps the
//! `{success, error, data}` envelope the API answers with. The typed wrappers
//! in [`api`] sit on top of it, one per remote resource.
//!
//! # Example
//!
//! ```no_run
//! use elasticemail_rs::Client;
//! use elasticemail_rs::api::EmailMessage;
//!
//! # async fn run() -> Result<(), elasticemail_rs::Error> {
//! let client = Client::builder("your-api-key").build()?;
//!
//! let account = client.account().load().await?;
//! println!("{:?} credits left", account.email_credits);
//!
//! let message = EmailMessage {
//!     subject: Some("Hello".to_string()),
//!     from: Some("team@example.com".to_string()),
//!     to: vec!["ada@example.com".to_string()],
//!     body_text: Some("Hi Ada".to_string()),
//!     ..Default::default()
//! };
//! let sent = client.email().send(&message).await?;
//! println!("transaction {:?}", sent.transaction_id);
//! # Ok(())
//! # }
//! ```
//!
//! # Raw calls
//!
//! Endpoints without a wrapper can be called directly:
//!
//! ```no_run
//! use elasticemail_rs::{Client, Params};
//!
//! # async fn run() -> Result<(), elasticemail_rs::Error> {
//! let client = Client::from_env()?;
//! let response = client
//!     .send_request("account/loadinboundoptions", Params::new(), "POST", Vec::new())
//!     .await?;
//! println!("{:?}", response.into_payload());
//! # Ok(())
//! # }
//! ```
//!
//! # Debugging
//!
//! Set `LOUD_WIRE=1` to print every request and response to stderr, with the
//! API key redacted.

pub mod api;
mod client;
mod errors;
mod http;
pub mod invite;
pub mod models;
mod params;
mod response;
pub mod types;


pub use client::{
    Client, ClientBuilder, Configuration, DEFAULT_TIMEOUT, ENV_API_KEY, ENV_API_URL,
    ENV_TIMEOUT_SECS,
};
pub use errors::Error;
pub use http::common::{DEFAULT_BASE_URL, Method};
pub use http::dispatch::{Dispatcher, Request};
pub use http::transport::{
    FilePart, HttpRequest, Part, RawResponse, RequestBody, ReqwestTransport, Transport,
};
pub use params::{DATE_FORMAT, IntoParam, Params};
pub use response::{ApiResponse, Envelope};

pub use api::{
    AccessTokenApi, AccountApi, CampaignApi, ChannelApi, ContactApi, DomainApi, EmailApi,
    EmailMessage, ExportApi, FileApi, ListApi, LogApi, SegmentApi, SmsApi, TemplateApi,
};
pub use types::{AccessLevel, SubAccountRef};

//! Typed wrappers, one per remote resource.
//!
//! Each wrapper borrows a [`Client`](crate::Client) and maps typed arguments
//! onto the endpoint's parameter names. Every endpoint is called with POST.

mod access_token;
mod account;
mod campaign;
mod channel;
mod contact;
mod domain;
mod email;
mod export;
mod file;
mod list;
mod log;
mod segment;
mod sms;
mod template;

pub use access_token::AccessTokenApi;
pub use account::{AccountApi, SubAccountOptions, WebhookNotifications};
pub use campaign::CampaignApi;
pub use channel::ChannelApi;
pub use contact::{ContactApi, ContactOptions, ContactUpdate, ContactUploadOptions};
pub use domain::DomainApi;
pub use email::{EmailApi, EmailMessage, JobStatusFilter};
pub use export::ExportApi;
pub use file::{FileApi, FileRef, FileUploadOptions};
pub use list::{ListApi, ListRule};
pub use log::{LogApi, LogFilter};
pub use segment::SegmentApi;
pub use sms::SmsApi;
pub use template::{TemplateApi, TemplateContent};

use crate::client::Client;
use crate::errors::Error;
use crate::http::dispatch::Request;
use crate::params::{IntoParam, Params};
use crate::response::ApiResponse;
use crate::types::{CompressionFormat, ExportFileFormats};
use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;

/// Calls an endpoint and decodes its payload.
async fn call<T: DeserializeOwned>(
    client: &Client,
    path: &str,
    params: Params,
) -> Result<T, Error> {
    client
        .dispatch(Request::post(path).params_from(params))
        .await?
        .into_typed()
}

/// Calls an endpoint that only signals completion.
async fn call_unit(client: &Client, path: &str, params: Params) -> Result<(), Error> {
    client
        .dispatch(Request::post(path).params_from(params))
        .await
        .map(|_| ())
}

/// Decodes a boolean answer. `false` arrives as an envelope without data.
fn into_flag(response: ApiResponse) -> Result<bool, Error> {
    match response {
        ApiResponse::Envelope(_) => Ok(false),
        payload => payload.into_typed(),
    }
}

/// Wire codes of a list of enum values, for `;`-joined parameters.
fn codes<T: IntoParam + Clone>(values: &[T]) -> impl Iterator<Item = String> + '_ {
    values.iter().cloned().filter_map(IntoParam::into_param)
}

/// Limit and offset of a listing call. `None` leaves the server default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Page {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl Page {
    #[must_use]
    pub const fn new(limit: u32, offset: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }

    fn apply(self, params: Params) -> Params {
        params.set("limit", self.limit).set("offset", self.offset)
    }
}

/// Output settings shared by every export endpoint.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExportOptions {
    pub file_format: Option<ExportFileFormats>,
    pub compression_format: Option<CompressionFormat>,
    pub file_name: Option<String>,
}

impl ExportOptions {
    fn apply(&self, params: Params) -> Params {
        params
            .set("fileFormat", self.file_format.clone())
            .set("compressionFormat", self.compression_format.clone())
            .set("fileName", self.file_name.as_ref())
    }
}

/// Optional `from` / `to` bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDateTime>,
    pub to: Option<NaiveDateTime>,
}

impl DateRange {
    #[must_use]
    pub const fn between(from: NaiveDateTime, to: NaiveDateTime) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    fn apply(self, params: Params) -> Params {
        params.set("from", self.from).set("to", self.to)
    }
}

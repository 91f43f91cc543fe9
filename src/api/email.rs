use super::call;
use crate::client::Client;
use crate::errors::Error;
use crate::http::dispatch::Request;
use crate::models::{EmailJobStatus, EmailSend, EmailStatus, EmailView};
use crate::params::Params;
use crate::types::EncodingType;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// A message for [`EmailApi::send`].
///
/// Only set fields are sent. Local files in `attachment_files` switch the
/// request to multipart; `attachments` names files already stored on the
/// account.
///
/// # Example
///
/// ```
/// use elasticemail_rs::api::EmailMessage;
///
/// let message = EmailMessage {
///     subject: Some("Welcome".to_string()),
///     from: Some("team@example.com".to_string()),
///     to: vec!["ada@example.com".to_string()],
///     body_text: Some("Hello {firstname}".to_string()),
///     ..Default::default()
/// }
/// .header("X-Campaign", "spring")
/// .merge("firstname", "Ada");
///
/// assert_eq!(message.headers["X-Campaign"], "spring");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmailMessage {
    pub subject: Option<String>,
    pub from: Option<String>,
    pub from_name: Option<String>,
    pub sender: Option<String>,
    pub sender_name: Option<String>,
    pub msg_from: Option<String>,
    pub msg_from_name: Option<String>,
    pub reply_to: Option<String>,
    pub reply_to_name: Option<String>,
    /// Recipients, each receiving a separate copy.
    pub to: Vec<String>,
    pub msg_to: Vec<String>,
    pub msg_cc: Vec<String>,
    pub msg_bcc: Vec<String>,
    pub lists: Vec<String>,
    pub segments: Vec<String>,
    pub merge_source_filename: Option<String>,
    pub data_source: Option<String>,
    pub channel: Option<String>,
    pub body_html: Option<String>,
    pub body_text: Option<String>,
    pub body_amp: Option<String>,
    pub charset: Option<String>,
    pub charset_body_html: Option<String>,
    pub charset_body_text: Option<String>,
    pub charset_body_amp: Option<String>,
    pub encoding_type: Option<EncodingType>,
    pub template: Option<String>,
    /// Local files uploaded with the message.
    pub attachment_files: Vec<PathBuf>,
    /// Names of files previously uploaded with the file API.
    pub attachments: Vec<String>,
    /// Extra headers, sent as `headers_{name}` = `{name}: {value}`.
    pub headers: BTreeMap<String, String>,
    pub post_back: Option<String>,
    /// Merge fields, sent as `merge_{name}`.
    pub merge: BTreeMap<String, String>,
    pub time_offset_minutes: Option<String>,
    pub pool_name: Option<String>,
    pub is_transactional: Option<bool>,
    pub track_opens: Option<bool>,
    pub track_clicks: Option<bool>,
    pub utm_source: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_campaign: Option<String>,
    pub utm_content: Option<String>,
}

impl EmailMessage {
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn merge(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.merge.insert(field.into(), value.into());
        self
    }

    #[must_use]
    pub fn attach(mut self, path: impl Into<PathBuf>) -> Self {
        self.attachment_files.push(path.into());
        self
    }

    fn to_params(&self) -> Params {
        Params::new()
            .set("subject", self.subject.as_ref())
            .set("from", self.from.as_ref())
            .set("fromName", self.from_name.as_ref())
            .set("sender", self.sender.as_ref())
            .set("senderName", self.sender_name.as_ref())
            .set("msgFrom", self.msg_from.as_ref())
            .set("msgFromName", self.msg_from_name.as_ref())
            .set("replyTo", self.reply_to.as_ref())
            .set("replyToName", self.reply_to_name.as_ref())
            .set_list("to", &self.to)
            .set_list("msgTo", &self.msg_to)
            .set_list("msgCC", &self.msg_cc)
            .set_list("msgBcc", &self.msg_bcc)
            .set_list("lists", &self.lists)
            .set_list("segments", &self.segments)
            .set("mergeSourceFilename", self.merge_source_filename.as_ref())
            .set("dataSource", self.data_source.as_ref())
            .set("channel", self.channel.as_ref())
            .set("bodyHtml", self.body_html.as_ref())
            .set("bodyText", self.body_text.as_ref())
            .set("charset", self.charset.as_ref())
            .set("charsetBodyHtml", self.charset_body_html.as_ref())
            .set("charsetBodyText", self.charset_body_text.as_ref())
            .set("encodingType", self.encoding_type.clone())
            .set("template", self.template.as_ref())
            .set("postBack", self.post_back.as_ref())
            .set("timeOffSetMinutes", self.time_offset_minutes.as_ref())
            .set("poolName", self.pool_name.as_ref())
            .set("isTransactional", self.is_transactional)
            .set_list("attachments", &self.attachments)
            .set("trackOpens", self.track_opens)
            .set("trackClicks", self.track_clicks)
            .set("utmSource", self.utm_source.as_ref())
            .set("utmMedium", self.utm_medium.as_ref())
            .set("utmCampaign", self.utm_campaign.as_ref())
            .set("utmContent", self.utm_content.as_ref())
            .set("bodyAmp", self.body_amp.as_ref())
            .set("charsetBodyAmp", self.charset_body_amp.as_ref())
            .set_prefixed(
                "headers_",
                self.headers
                    .iter()
                    .map(|(name, value)| (name, format!("{name}: {value}"))),
            )
            .set_prefixed("merge_", &self.merge)
    }
}

/// Which recipient groups [`EmailApi::get_status`] lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JobStatusFilter {
    pub failed: bool,
    pub sent: bool,
    pub delivered: bool,
    pub pending: bool,
    pub opened: bool,
    pub clicked: bool,
    pub abuse: bool,
    pub unsubscribed: bool,
    pub errors: bool,
    pub message_ids: bool,
}

impl JobStatusFilter {
    /// Lists every group, message IDs included.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            failed: true,
            sent: true,
            delivered: true,
            pending: true,
            opened: true,
            clicked: true,
            abuse: true,
            unsubscribed: true,
            errors: true,
            message_ids: true,
        }
    }

    fn apply(self, params: Params) -> Params {
        params
            .set("showFailed", self.failed)
            .set("showSent", self.sent)
            .set("showDelivered", self.delivered)
            .set("showPending", self.pending)
            .set("showOpened", self.opened)
            .set("showClicked", self.clicked)
            .set("showAbuse", self.abuse)
            .set("showUnsubscribed", self.unsubscribed)
            .set("showErrors", self.errors)
            .set("showMessageIDs", self.message_ids)
    }
}

/// Sending and tracking individual messages.
#[derive(Clone, Copy, Debug)]
pub struct EmailApi<'a> {
    client: &'a Client,
}

impl<'a> EmailApi<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Reports the delivery state of a send job.
    pub async fn get_status(
        &self,
        transaction_id: &str,
        filter: JobStatusFilter,
    ) -> Result<EmailJobStatus, Error> {
        let params = filter.apply(Params::new().set("transactionID", transaction_id));
        call(self.client, "email/getstatus", params).await
    }

    /// Sends a message.
    ///
    /// # Errors
    ///
    /// Besides the usual dispatch errors, [`Error::Attachment`] if one of
    /// `attachment_files` cannot be opened. Nothing is sent in that case.
    pub async fn send(&self, message: &EmailMessage) -> Result<EmailSend, Error> {
        let request = Request::post("email/send")
            .params_from(message.to_params())
            .attachments(message.attachment_files.iter().cloned());
        self.client.dispatch(request).await?.into_typed()
    }

    pub async fn status(&self, message_id: &str) -> Result<EmailStatus, Error> {
        call(self.client, "email/status", Params::new().set("messageID", message_id)).await
    }

    /// Renders a sent message as the recipient sees it.
    pub async fn view(&self, message_id: &str, enable_tracking: bool) -> Result<EmailView, Error> {
        let params = Params::new()
            .set("messageID", message_id)
            .set("enableTracking", enable_tracking);
        call(self.client, "email/view", params).await
    }
}

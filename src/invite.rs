//! Bulk invitations from a CSV file of recipients.
//!
//! Each row is `name,email` without a header. Every recipient gets their own
//! `email/send` call; failures are collected per recipient and never abort
//! the batch.
//!
//! ```no_run
//! use elasticemail_rs::Client;
//! use elasticemail_rs::invite::{Invitation, parse_recipients, send_invitations};
//!
//! # async fn run() -> Result<(), elasticemail_rs::Error> {
//! let client = Client::from_env()?;
//! let recipients = parse_recipients(std::fs::File::open("invitees.csv").unwrap())?;
//! let invitation = Invitation::new(
//!     "You're invited",
//!     "team@example.com",
//!     "Dear {name},\nYour username is {email}.",
//! );
//! let report = send_invitations(&client, &invitation, recipients, 4).await;
//! println!("sent {}, failed {}", report.sent.len(), report.failed.len());
//! # Ok(())
//! # }
//! ```

use crate::api::EmailMessage;
use crate::client::Client;
use crate::errors::Error;
use crate::models::EmailSend;
use futures_util::{StreamExt, stream};
use std::io::Read;

/// One row of the recipients file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InviteRecipient {
    pub name: String,
    pub email: String,
}

/// Reads recipients from CSV: column 0 is the name, column 1 the email.
///
/// Rows with an empty name are skipped. Extra columns are ignored.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for unreadable CSV or a row without an
/// email, naming the 1-based row.
pub fn parse_recipients<R: Read>(reader: R) -> Result<Vec<InviteRecipient>, Error> {
    let mut rows = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut recipients = Vec::new();
    for (index, record) in rows.records().enumerate() {
        let record = record.map_err(|e| {
            Error::InvalidInput(format!("row {}: unreadable CSV: {e}", index + 1))
        })?;
        let row = record
            .position()
            .map_or(index as u64 + 1, csv::Position::line);
        let name = record.get(0).unwrap_or_default();
        if name.is_empty() {
            tracing::debug!(row, "Skipping row without a name");
            continue;
        }
        let email = record.get(1).unwrap_or_default();
        if email.is_empty() {
            return Err(Error::InvalidInput(format!(
                "row {row}: missing email for '{name}'"
            )));
        }
        recipients.push(InviteRecipient {
            name: name.to_string(),
            email: email.to_string(),
        });
    }
    Ok(recipients)
}

/// Message template sent to every recipient.
///
/// `{name}` and `{email}` in `subject` and `body_text` are replaced per
/// recipient.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invitation {
    pub subject: String,
    pub from: String,
    pub from_name: Option<String>,
    pub body_text: String,
    pub track_opens: bool,
    pub track_clicks: bool,
}

impl Invitation {
    /// Creates an invitation with tracking disabled.
    #[must_use]
    pub fn new(
        subject: impl Into<String>,
        from: impl Into<String>,
        body_text: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            from: from.into(),
            from_name: None,
            body_text: body_text.into(),
            track_opens: false,
            track_clicks: false,
        }
    }

    #[must_use]
    pub fn with_from_name(mut self, from_name: impl Into<String>) -> Self {
        self.from_name = Some(from_name.into());
        self
    }

    #[must_use]
    pub const fn with_tracking(mut self, opens: bool, clicks: bool) -> Self {
        self.track_opens = opens;
        self.track_clicks = clicks;
        self
    }

    /// Builds the message for one recipient.
    #[must_use]
    pub fn render(&self, recipient: &InviteRecipient) -> EmailMessage {
        let fill = |text: &str| {
            text.replace("{name}", &recipient.name)
                .replace("{email}", &recipient.email)
        };
        EmailMessage {
            subject: Some(fill(&self.subject)),
            from: Some(self.from.clone()),
            from_name: self.from_name.clone(),
            msg_from_name: self.from_name.clone(),
            to: vec![recipient.email.clone()],
            body_text: Some(fill(&self.body_text)),
            track_opens: Some(self.track_opens),
            track_clicks: Some(self.track_clicks),
            ..Default::default()
        }
    }
}

/// Outcome of [`send_invitations`], in completion order.
#[derive(Debug, Default)]
pub struct InviteReport {
    pub sent: Vec<(InviteRecipient, EmailSend)>,
    pub failed: Vec<(InviteRecipient, Error)>,
}

impl InviteReport {
    /// Returns `true` if every recipient was sent to.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Sends `invitation` to each recipient with at most `concurrency` calls in flight.
///
/// A `concurrency` of 0 is treated as 1.
pub async fn send_invitations(
    client: &Client,
    invitation: &Invitation,
    recipients: Vec<InviteRecipient>,
    concurrency: usize,
) -> InviteReport {
    let email = client.email();
    let total = recipients.len();

    let results: Vec<_> = stream::iter(recipients)
        .map(|recipient| async move {
            let result = email.send(&invitation.render(&recipient)).await;
            (recipient, result)
        })
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;

    let mut report = InviteReport::default();
    for (recipient, result) in results {
        match result {
            Ok(send) => report.sent.push((recipient, send)),
            Err(e) => {
                tracing::warn!("Invitation to '{}' failed: {}", recipient.email, e);
                report.failed.push((recipient, e));
            }
        }
    }

    tracing::info!(
        total,
        sent = report.sent.len(),
        failed = report.failed.len(),
        "Invitations finished"
    );
    report
}

use super::{DateRange, Page, call, call_unit, codes};
use crate::client::Client;
use crate::errors::Error;
use crate::models::{EventLog, LinkTrackingDetails, Log, LogSummary};
use crate::params::Params;
use crate::types::{IntervalType, LogEventStatus, LogJobStatus, MessageCategory};

/// Selects the messages [`LogApi::load`] returns.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogFilter {
    /// Empty means every status.
    pub statuses: Vec<LogJobStatus>,
    pub range: DateRange,
    pub channel_name: Option<String>,
    pub include_email: Option<bool>,
    pub include_sms: Option<bool>,
    pub message_categories: Vec<MessageCategory>,
    /// Only messages to this recipient.
    pub email: Option<String>,
    pub ip_address: Option<String>,
}

impl LogFilter {
    fn apply(&self, page: Page, params: Params) -> Params {
        let params = params.set_list("statuses", codes(&self.statuses));
        let params = self
            .range
            .apply(params)
            .set("channelName", self.channel_name.as_ref());
        page.apply(params)
            .set("includeEmail", self.include_email)
            .set("includeSms", self.include_sms)
            .set_list("messageCategory", codes(&self.message_categories))
            .set("email", self.email.as_ref())
            .set("ipaddress", self.ip_address.as_ref())
    }
}

/// Delivery logs and reports.
#[derive(Clone, Copy, Debug)]
pub struct LogApi<'a> {
    client: &'a Client,
}

impl<'a> LogApi<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Cancels queued messages of a channel or of a single send job.
    pub async fn cancel_in_progress(
        &self,
        channel_name: Option<&str>,
        transaction_id: Option<&str>,
    ) -> Result<(), Error> {
        let params = Params::new()
            .set("channelName", channel_name)
            .set("transactionID", transaction_id);
        call_unit(self.client, "log/cancelinprogress", params).await
    }

    pub async fn events(
        &self,
        statuses: &[LogEventStatus],
        range: DateRange,
        channel_name: Option<&str>,
        page: Page,
    ) -> Result<EventLog, Error> {
        let params = Params::new().set_list("statuses", codes(statuses));
        let params = range.apply(params).set("channelName", channel_name);
        call(self.client, "log/events", page.apply(params)).await
    }

    pub async fn link_tracking(
        &self,
        range: DateRange,
        page: Page,
        channel_name: Option<&str>,
    ) -> Result<LinkTrackingDetails, Error> {
        let params = page
            .apply(range.apply(Params::new()))
            .set("channelName", channel_name);
        call(self.client, "log/linktracking", params).await
    }

    pub async fn load(&self, filter: &LogFilter, page: Page) -> Result<Log, Error> {
        call(self.client, "log/load", filter.apply(page, Params::new())).await
    }

    /// Aggregated delivery statistics for a period.
    pub async fn summary(
        &self,
        range: DateRange,
        channel_name: Option<&str>,
        interval: Option<IntervalType>,
        transaction_id: Option<&str>,
    ) -> Result<LogSummary, Error> {
        let params = range
            .apply(Params::new())
            .set("channelName", channel_name)
            .set("interval", interval)
            .set("transactionID", transaction_id);
        call(self.client, "log/summary", params).await
    }
}

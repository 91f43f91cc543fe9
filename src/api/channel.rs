use super::{ExportOptions, Page, call, call_unit};
use crate::client::Client;
use crate::errors::Error;
use crate::models::{Channel, ExportLink};
use crate::params::Params;

/// Channels group outgoing mail for reporting.
#[derive(Clone, Copy, Debug)]
pub struct ChannelApi<'a> {
    client: &'a Client,
}

impl<'a> ChannelApi<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Creates a channel and returns its name.
    pub async fn add(&self, name: &str) -> Result<String, Error> {
        call(self.client, "channel/add", Params::new().set("name", name)).await
    }

    pub async fn delete(&self, name: &str) -> Result<(), Error> {
        call_unit(self.client, "channel/delete", Params::new().set("name", name)).await
    }

    pub async fn export<S: AsRef<str>>(
        &self,
        channel_names: &[S],
        options: &ExportOptions,
    ) -> Result<ExportLink, Error> {
        let params = Params::new().set_list("channelNames", channel_names);
        call(self.client, "channel/export", options.apply(params)).await
    }

    pub async fn list(&self, page: Page) -> Result<Vec<Channel>, Error> {
        call(self.client, "channel/list", page.apply(Params::new())).await
    }

    /// Renames a channel and returns the new name.
    pub async fn update(&self, name: &str, new_name: &str) -> Result<String, Error> {
        let params = Params::new().set("name", name).set("newName", new_name);
        call(self.client, "channel/update", params).await
    }
}

use super::{ExportOptions, call, call_unit};
use crate::client::Client;
use crate::errors::Error;
use crate::models::{Campaign, CampaignChannel, ExportLink};
use crate::params::Params;

/// Campaigns. A campaign is addressed by the ID of its channel.
#[derive(Clone, Copy, Debug)]
pub struct CampaignApi<'a> {
    client: &'a Client,
}

impl<'a> CampaignApi<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Creates a campaign and returns its ID.
    ///
    /// The campaign is sent as JSON in the `campaign` parameter.
    pub async fn add(&self, campaign: &Campaign) -> Result<i64, Error> {
        call(self.client, "campaign/add", campaign_params(campaign)?).await
    }

    /// Copies a campaign and returns the new ID.
    pub async fn copy(
        &self,
        channel_id: i32,
        new_campaign_name: Option<&str>,
    ) -> Result<i64, Error> {
        let params = Params::new()
            .set("channelID", channel_id)
            .set("newCampaignName", new_campaign_name);
        call(self.client, "campaign/copy", params).await
    }

    pub async fn delete(&self, channel_id: i32) -> Result<(), Error> {
        let params = Params::new().set("channelID", channel_id);
        call_unit(self.client, "campaign/delete", params).await
    }

    /// Exports the selected campaigns, or all of them when `channel_ids` is empty.
    pub async fn export(
        &self,
        channel_ids: &[i32],
        options: &ExportOptions,
    ) -> Result<ExportLink, Error> {
        let params =
            Params::new().set_list("channelIDs", channel_ids.iter().map(i32::to_string));
        call(self.client, "campaign/export", options.apply(params)).await
    }

    pub async fn list(
        &self,
        search: Option<&str>,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Vec<CampaignChannel>, Error> {
        let params = Params::new()
            .set("search", search)
            .set("offset", offset)
            .set("limit", limit);
        call(self.client, "campaign/list", params).await
    }

    /// Updates a campaign, matched by its `ChannelID`. Returns the campaign ID.
    pub async fn update(&self, campaign: &Campaign) -> Result<i64, Error> {
        call(self.client, "campaign/update", campaign_params(campaign)?).await
    }
}

fn campaign_params(campaign: &Campaign) -> Result<Params, Error> {
    let json = serde_json::to_string(campaign)
        .map_err(|e| Error::InvalidInput(format!("campaign could not be serialized: {e}")))?;
    Ok(Params::new().set("campaign", json))
}

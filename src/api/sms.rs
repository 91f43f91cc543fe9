use super::call_unit;
use crate::client::Client;
use crate::errors::Error;
use crate::params::Params;

#[derive(Clone, Copy, Debug)]
pub struct SmsApi<'a> {
    client: &'a Client,
}

impl<'a> SmsApi<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Sends a text message to a phone number in international format.
    pub async fn send(&self, to: &str, body: &str) -> Result<(), Error> {
        let params = Params::new().set("to", to).set("body", body);
        call_unit(self.client, "sms/send", params).await
    }
}

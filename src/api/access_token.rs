use super::{call, call_unit};
use crate::client::Client;
use crate::errors::Error;
use crate::models::AccessToken;
use crate::params::Params;
use crate::types::AccessLevel;

/// Access tokens scoped to a subset of the account's permissions.
#[derive(Clone, Copy, Debug)]
pub struct AccessTokenApi<'a> {
    client: &'a Client,
}

impl<'a> AccessTokenApi<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Creates a token and returns its secret value.
    pub async fn add(&self, token_name: &str, access_level: AccessLevel) -> Result<String, Error> {
        let params = Params::new()
            .set("tokenName", token_name)
            .set("accessLevel", access_level);
        call(self.client, "accesstoken/add", params).await
    }

    pub async fn delete(&self, token_name: &str) -> Result<(), Error> {
        let params = Params::new().set("tokenName", token_name);
        call_unit(self.client, "accesstoken/delete", params).await
    }

    pub async fn list(&self) -> Result<Vec<AccessToken>, Error> {
        call(self.client, "accesstoken/list", Params::new()).await
    }

    /// Changes the permissions of a token, optionally renaming it.
    pub async fn update(
        &self,
        token_name: &str,
        access_level: AccessLevel,
        new_token_name: Option<&str>,
    ) -> Result<(), Error> {
        let params = Params::new()
            .set("tokenName", token_name)
            .set("accessLevel", access_level)
            .set("tokenNameNew", new_token_name);
        call_unit(self.client, "accesstoken/update", params).await
    }
}

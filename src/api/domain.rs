use super::{call, call_unit};
use crate::client::Client;
use crate::errors::Error;
use crate::models::{DomainDetail, ValidationStatus};
use crate::params::Params;
use crate::types::TrackingType;

/// Sending domains and their DNS verification.
#[derive(Clone, Copy, Debug)]
pub struct DomainApi<'a> {
    client: &'a Client,
}

impl<'a> DomainApi<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn add(
        &self,
        domain: &str,
        tracking_type: Option<TrackingType>,
        set_as_default: bool,
    ) -> Result<(), Error> {
        let params = Params::new()
            .set("domain", domain)
            .set("trackingType", tracking_type)
            .set("setAsDefault", set_as_default);
        call_unit(self.client, "domain/add", params).await
    }

    pub async fn delete(&self, domain: &str) -> Result<(), Error> {
        call_unit(self.client, "domain/delete", domain_param(domain)).await
    }

    pub async fn list(&self) -> Result<Vec<DomainDetail>, Error> {
        call(self.client, "domain/list", Params::new()).await
    }

    /// Makes `domain` the default sender domain.
    pub async fn set_default(&self, domain: &str) -> Result<(), Error> {
        call_unit(self.client, "domain/setdefault", domain_param(domain)).await
    }

    pub async fn verify_dkim(&self, domain: &str) -> Result<String, Error> {
        call(self.client, "domain/verifydkim", domain_param(domain)).await
    }

    pub async fn verify_mx(&self, domain: &str) -> Result<String, Error> {
        call(self.client, "domain/verifymx", domain_param(domain)).await
    }

    pub async fn verify_spf(&self, domain: &str) -> Result<ValidationStatus, Error> {
        call(self.client, "domain/verifyspf", domain_param(domain)).await
    }

    pub async fn verify_tracking(
        &self,
        domain: &str,
        tracking_type: Option<TrackingType>,
    ) -> Result<String, Error> {
        let params = domain_param(domain).set("trackingType", tracking_type);
        call(self.client, "domain/verifytracking", params).await
    }
}

fn domain_param(domain: &str) -> Params {
    Params::new().set("domain", domain)
}

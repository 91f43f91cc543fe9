use super::{Page, call, call_unit};
use crate::client::Client;
use crate::errors::Error;
use crate::models::{Export, ExportTypeCounts};
use crate::params::Params;
use crate::types::ExportStatus;

/// Export files produced by the other resources' `export` calls.
#[derive(Clone, Copy, Debug)]
pub struct ExportApi<'a> {
    client: &'a Client,
}

impl<'a> ExportApi<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn check_status(&self, public_export_id: &str) -> Result<ExportStatus, Error> {
        let params = Params::new().set("publicExportID", public_export_id);
        call(self.client, "export/checkstatus", params).await
    }

    pub async fn count_by_type(&self) -> Result<ExportTypeCounts, Error> {
        call(self.client, "export/countbytype", Params::new()).await
    }

    pub async fn delete(&self, public_export_id: &str) -> Result<(), Error> {
        let params = Params::new().set("publicExportID", public_export_id);
        call_unit(self.client, "export/delete", params).await
    }

    pub async fn list(&self, page: Page) -> Result<Vec<Export>, Error> {
        call(self.client, "export/list", page.apply(Params::new())).await
    }
}

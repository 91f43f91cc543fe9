use super::{call, call_unit};
use crate::client::Client;
use crate::errors::Error;
use crate::http::dispatch::Request;
use crate::models::File;
use crate::params::Params;
use bytes::Bytes;
use std::path::PathBuf;

/// Identifies a stored file by ID or by name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileRef {
    Id(i32),
    Name(String),
}

impl FileRef {
    fn apply(&self, params: Params) -> Params {
        match self {
            Self::Id(id) => params.set("fileID", *id),
            Self::Name(name) => params.set("filename", name),
        }
    }
}

/// Options for [`FileApi::upload`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileUploadOptions {
    /// Stored name. Defaults to the local file name.
    pub name: Option<String>,
    pub expires_after_days: Option<u32>,
    /// Fail instead of replacing a file with the same name.
    pub throw_if_exists: Option<bool>,
}

/// Files stored on the account, usable as attachments and merge sources.
#[derive(Clone, Copy, Debug)]
pub struct FileApi<'a> {
    client: &'a Client,
}

impl<'a> FileApi<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn delete(&self, file: &FileRef) -> Result<(), Error> {
        call_unit(self.client, "file/delete", file.apply(Params::new())).await
    }

    /// Downloads the content of a stored file.
    pub async fn download(&self, file: &FileRef) -> Result<Bytes, Error> {
        let request = Request::post("file/download").params_from(file.apply(Params::new()));
        self.client.dispatcher().dispatch_raw(request).await
    }

    /// Lists the files attached to a sent message.
    pub async fn list(&self, msg_id: &str) -> Result<Vec<File>, Error> {
        call(self.client, "file/list", Params::new().set("msgID", msg_id)).await
    }

    pub async fn list_all(&self) -> Result<Vec<File>, Error> {
        call(self.client, "file/listall", Params::new()).await
    }

    pub async fn load(&self, filename: &str) -> Result<File, Error> {
        call(self.client, "file/load", Params::new().set("filename", filename)).await
    }

    /// Uploads a local file. Sent as multipart, the file part first.
    pub async fn upload(
        &self,
        path: impl Into<PathBuf>,
        options: &FileUploadOptions,
    ) -> Result<File, Error> {
        let params = Params::new()
            .set("name", options.name.as_ref())
            .set("expiresAfterDays", options.expires_after_days)
            .set("throwIfExists", options.throw_if_exists);
        let request = Request::post("file/upload")
            .params_from(params)
            .attachment(path);
        self.client.dispatch(request).await?.into_typed()
    }
}

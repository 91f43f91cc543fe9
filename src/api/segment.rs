use super::{DateRange, ExportOptions, call, call_unit};
use crate::client::Client;
use crate::errors::Error;
use crate::models::{ExportLink, Segment};
use crate::params::Params;

/// Segments: saved contact queries.
#[derive(Clone, Copy, Debug)]
pub struct SegmentApi<'a> {
    client: &'a Client,
}

impl<'a> SegmentApi<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn add(&self, segment_name: &str, rule: &str) -> Result<Segment, Error> {
        let params = Params::new()
            .set("segmentName", segment_name)
            .set("rule", rule);
        call(self.client, "segment/add", params).await
    }

    pub async fn copy(
        &self,
        source_segment_name: &str,
        new_segment_name: Option<&str>,
        rule: Option<&str>,
    ) -> Result<Segment, Error> {
        let params = Params::new()
            .set("sourceSegmentName", source_segment_name)
            .set("newSegmentName", new_segment_name)
            .set("rule", rule);
        call(self.client, "segment/copy", params).await
    }

    pub async fn delete(&self, segment_name: &str) -> Result<(), Error> {
        let params = Params::new().set("segmentName", segment_name);
        call_unit(self.client, "segment/delete", params).await
    }

    pub async fn export(
        &self,
        segment_name: &str,
        options: &ExportOptions,
    ) -> Result<ExportLink, Error> {
        let params = options.apply(Params::new().set("segmentName", segment_name));
        call(self.client, "segment/export", params).await
    }

    /// Lists segments, with their history over `range` when `include_history` is set.
    pub async fn list(
        &self,
        include_history: bool,
        range: DateRange,
    ) -> Result<Vec<Segment>, Error> {
        let params = range.apply(Params::new().set("includeHistory", include_history));
        call(self.client, "segment/list", params).await
    }

    pub async fn load_by_name<S: AsRef<str>>(
        &self,
        segment_names: &[S],
        include_history: bool,
        range: DateRange,
    ) -> Result<Vec<Segment>, Error> {
        let params = Params::new()
            .set_list("segmentNames", segment_names)
            .set("includeHistory", include_history);
        call(self.client, "segment/loadbyname", range.apply(params)).await
    }

    /// Renames a segment or changes its rule.
    pub async fn update(
        &self,
        segment_name: &str,
        new_segment_name: Option<&str>,
        rule: Option<&str>,
    ) -> Result<Segment, Error> {
        let params = Params::new()
            .set("segmentName", segment_name)
            .set("newSegmentName", new_segment_name)
            .set("rule", rule);
        call(self.client, "segment/update", params).await
    }
}

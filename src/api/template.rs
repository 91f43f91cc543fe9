use super::{Page, call, call_unit, into_flag};
use crate::client::Client;
use crate::errors::Error;
use crate::http::dispatch::Request;
use crate::models::{Template, TemplateList, TemplateTag, TemplateTagList};
use crate::params::Params;
use crate::types::TemplateScope;

/// Content and defaults of a template.
///
/// `subject`, `from_email` and `from_name` are required by
/// [`TemplateApi::add`]; `update` only sends the fields that are set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TemplateContent {
    pub subject: Option<String>,
    pub from_email: Option<String>,
    pub from_name: Option<String>,
    pub body_html: Option<String>,
    pub body_text: Option<String>,
    pub body_amp: Option<String>,
    pub css: Option<String>,
    pub tags: Vec<String>,
}

/// Email templates and template tags.
#[derive(Clone, Copy, Debug)]
pub struct TemplateApi<'a> {
    client: &'a Client,
}

impl<'a> TemplateApi<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Creates a template and returns its ID.
    ///
    /// `original_template_id` starts the new template from an existing one.
    pub async fn add(
        &self,
        name: &str,
        content: &TemplateContent,
        scope: Option<TemplateScope>,
        original_template_id: Option<i32>,
    ) -> Result<i64, Error> {
        let params = Params::new()
            .set("name", name)
            .set("subject", content.subject.as_ref())
            .set("fromEmail", content.from_email.as_ref())
            .set("fromName", content.from_name.as_ref())
            .set("templateScope", scope)
            .set("bodyHtml", content.body_html.as_ref())
            .set("bodyText", content.body_text.as_ref())
            .set("css", content.css.as_ref())
            .set("originalTemplateID", original_template_id)
            .set_list("tags", &content.tags)
            .set("bodyAmp", content.body_amp.as_ref());
        call(self.client, "template/add", params).await
    }

    pub async fn add_tag(&self, tag: &str) -> Result<TemplateTag, Error> {
        call(self.client, "template/addtag", Params::new().set("tag", tag)).await
    }

    /// Returns `true` if a campaign or automation uses the template.
    pub async fn check_usage(&self, template_id: i32) -> Result<bool, Error> {
        let request = Request::post("template/checkusage").param("templateID", template_id);
        into_flag(self.client.dispatch(request).await?)
    }

    pub async fn copy(
        &self,
        template_id: i32,
        name: &str,
        subject: &str,
        from_email: &str,
        from_name: &str,
    ) -> Result<Template, Error> {
        let params = Params::new()
            .set("templateID", template_id)
            .set("name", name)
            .set("subject", subject)
            .set("fromEmail", from_email)
            .set("fromName", from_name);
        call(self.client, "template/copy", params).await
    }

    pub async fn delete(&self, template_id: i32) -> Result<(), Error> {
        let params = Params::new().set("templateID", template_id);
        call_unit(self.client, "template/delete", params).await
    }

    pub async fn delete_bulk(&self, template_ids: &[i32]) -> Result<(), Error> {
        let params =
            Params::new().set_list("templateIDs", template_ids.iter().map(i32::to_string));
        call_unit(self.client, "template/deletebulk", params).await
    }

    pub async fn delete_tag(&self, tag: &str) -> Result<(), Error> {
        call_unit(self.client, "template/deletetag", Params::new().set("tag", tag)).await
    }

    /// Lists templates, optionally only those carrying one of `tags`.
    pub async fn get_list<S: AsRef<str>>(
        &self,
        page: Page,
        tags: &[S],
    ) -> Result<TemplateList, Error> {
        let params = page.apply(Params::new()).set_list("tags", tags);
        call(self.client, "template/getlist", params).await
    }

    pub async fn get_tag_list(&self) -> Result<TemplateTagList, Error> {
        call(self.client, "template/gettaglist", Params::new()).await
    }

    pub async fn load_template(&self, template_id: i32) -> Result<Template, Error> {
        let params = Params::new().set("templateID", template_id);
        call(self.client, "template/loadtemplate", params).await
    }

    pub async fn update(
        &self,
        template_id: i32,
        name: Option<&str>,
        content: &TemplateContent,
        scope: Option<TemplateScope>,
        remove_screenshot: Option<bool>,
    ) -> Result<(), Error> {
        let params = Params::new()
            .set("templateID", template_id)
            .set("templateScope", scope)
            .set("name", name)
            .set("subject", content.subject.as_ref())
            .set("fromEmail", content.from_email.as_ref())
            .set("fromName", content.from_name.as_ref())
            .set("bodyHtml", content.body_html.as_ref())
            .set("bodyText", content.body_text.as_ref())
            .set("css", content.css.as_ref())
            .set("removeScreenshot", remove_screenshot)
            .set_list("tags", &content.tags)
            .set("bodyAmp", content.body_amp.as_ref());
        call_unit(self.client, "template/update", params).await
    }
}

use super::{ExportOptions, Page, call, call_unit, codes};
use crate::client::Client;
use crate::errors::Error;
use crate::http::dispatch::Request;
use crate::models::{
    BlockedContact, Contact, ContactCollection, ContactHistory, ContactStatusCounts, ExportLink,
};
use crate::params::Params;
use crate::types::{ConsentTracking, ContactSort, ContactSource, ContactStatus};
use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Prefix of custom field parameters.
const FIELD_PREFIX: &str = "field_";

/// Optional details for [`ContactApi::add`] and [`ContactApi::quick_add`].
///
/// `status` and `notes` are only sent by `quick_add`. The activation and
/// redirect URLs are only sent by `add`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactOptions {
    pub public_list_ids: Vec<String>,
    pub list_names: Vec<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub source: Option<ContactSource>,
    pub status: Option<ContactStatus>,
    pub notes: Option<String>,
    pub return_url: Option<String>,
    pub source_url: Option<String>,
    pub activation_return_url: Option<String>,
    pub activation_template: Option<String>,
    pub send_activation: Option<bool>,
    pub already_active_url: Option<String>,
    pub consent_date: Option<NaiveDateTime>,
    pub consent_ip: Option<String>,
    pub consent_tracking: Option<ConsentTracking>,
    pub notify_email: Option<String>,
    /// Custom fields, sent as `field_{name}`.
    pub fields: BTreeMap<String, String>,
}

impl ContactOptions {
    fn apply_for_add(&self, params: Params) -> Params {
        params
            .set_list("publicListID", &self.public_list_ids)
            .set_list("listName", &self.list_names)
            .set("firstName", self.first_name.as_ref())
            .set("lastName", self.last_name.as_ref())
            .set("source", self.source.clone())
            .set("returnUrl", self.return_url.as_ref())
            .set("sourceUrl", self.source_url.as_ref())
            .set("activationReturnUrl", self.activation_return_url.as_ref())
            .set("activationTemplate", self.activation_template.as_ref())
            .set("sendActivation", self.send_activation)
            .set("consentDate", self.consent_date)
            .set("consentIP", self.consent_ip.as_ref())
            .set("notifyEmail", self.notify_email.as_ref())
            .set("alreadyActiveUrl", self.already_active_url.as_ref())
            .set("consentTracking", self.consent_tracking.clone())
            .set_prefixed(FIELD_PREFIX, &self.fields)
    }

    fn apply_for_quick_add(&self, params: Params) -> Params {
        params
            .set("firstName", self.first_name.as_ref())
            .set("lastName", self.last_name.as_ref())
            .set_list("publicListID", &self.public_list_ids)
            .set_list("listName", &self.list_names)
            .set("status", self.status.clone())
            .set("notes", self.notes.as_ref())
            .set("consentDate", self.consent_date)
            .set("consentIP", self.consent_ip.as_ref())
            .set("notifyEmail", self.notify_email.as_ref())
            .set("consentTracking", self.consent_tracking.clone())
            .set("source", self.source.clone())
            .set_prefixed(FIELD_PREFIX, &self.fields)
    }
}

/// Changes applied by [`ContactApi::update`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// When `true` (the server default), custom fields not listed are cleared.
    pub clear_rest_of_fields: Option<bool>,
    pub fields: BTreeMap<String, String>,
    /// Custom fields in `name=value;name=value` form.
    pub custom_fields: Option<String>,
}

/// Options for [`ContactApi::upload`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactUploadOptions {
    pub allow_unsubscribe: Option<bool>,
    pub list_id: Option<i32>,
    pub list_name: Option<String>,
    pub status: Option<ContactStatus>,
    pub consent_date: Option<NaiveDateTime>,
    pub consent_ip: Option<String>,
    pub consent_tracking: Option<ConsentTracking>,
}

/// Contacts and their status.
///
/// Bulk operations select contacts with either a `rule` (a segment query
/// such as `Status = Engaged`) or an explicit list of emails.
#[derive(Clone, Copy, Debug)]
pub struct ContactApi<'a> {
    client: &'a Client,
}

impl<'a> ContactApi<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Adds a contact through a public account's subscription form.
    /// Returns the contact's public ID.
    pub async fn add(
        &self,
        public_account_id: &str,
        email: &str,
        options: &ContactOptions,
    ) -> Result<String, Error> {
        let params = Params::new()
            .set("publicAccountID", public_account_id)
            .set("email", email);
        call(self.client, "contact/add", options.apply_for_add(params)).await
    }

    pub async fn add_blocked(&self, email: &str, status: ContactStatus) -> Result<(), Error> {
        let params = Params::new().set("email", email).set("status", status);
        call_unit(self.client, "contact/addblocked", params).await
    }

    /// Sets one property or custom field of a contact.
    pub async fn change_property(&self, email: &str, name: &str, value: &str) -> Result<(), Error> {
        let params = Params::new()
            .set("email", email)
            .set("name", name)
            .set("value", value);
        call_unit(self.client, "contact/changeproperty", params).await
    }

    pub async fn change_status<S: AsRef<str>>(
        &self,
        status: ContactStatus,
        rule: Option<&str>,
        emails: &[S],
    ) -> Result<(), Error> {
        let params = Params::new()
            .set("status", status)
            .set("rule", rule)
            .set_list("emails", emails);
        call_unit(self.client, "contact/changestatus", params).await
    }

    pub async fn count_by_status(&self, rule: Option<&str>) -> Result<ContactStatusCounts, Error> {
        call(self.client, "contact/countbystatus", Params::new().set("rule", rule)).await
    }

    pub async fn delete<S: AsRef<str>>(
        &self,
        rule: Option<&str>,
        emails: &[S],
    ) -> Result<(), Error> {
        let params = Params::new().set("rule", rule).set_list("emails", emails);
        call_unit(self.client, "contact/delete", params).await
    }

    pub async fn export<S: AsRef<str>>(
        &self,
        rule: Option<&str>,
        emails: &[S],
        options: &ExportOptions,
    ) -> Result<ExportLink, Error> {
        let params = Params::new().set("rule", rule).set_list("emails", emails);
        call(self.client, "contact/export", options.apply(params)).await
    }

    /// Finds a contact together with the lists it belongs to.
    pub async fn find_contact(&self, email: &str) -> Result<ContactCollection, Error> {
        call(self.client, "contact/findcontact", Params::new().set("email", email)).await
    }

    pub async fn get_contacts_by_list(
        &self,
        list_name: &str,
        page: Page,
    ) -> Result<Vec<Contact>, Error> {
        let params = page.apply(Params::new().set("listName", list_name));
        call(self.client, "contact/getcontactsbylist", params).await
    }

    pub async fn get_contacts_by_segment(
        &self,
        segment_name: &str,
        page: Page,
    ) -> Result<Vec<Contact>, Error> {
        let params = page.apply(Params::new().set("segmentName", segment_name));
        call(self.client, "contact/getcontactsbysegment", params).await
    }

    pub async fn list(
        &self,
        rule: Option<&str>,
        page: Page,
        sort: Option<ContactSort>,
    ) -> Result<Vec<Contact>, Error> {
        let params = page
            .apply(Params::new().set("rule", rule))
            .set("sort", sort);
        call(self.client, "contact/list", params).await
    }

    /// Lists blocked contacts having any of `statuses`.
    pub async fn load_blocked(
        &self,
        statuses: &[ContactStatus],
        search: Option<&str>,
        page: Page,
    ) -> Result<Vec<BlockedContact>, Error> {
        let params = Params::new()
            .set_list("statuses", codes(statuses))
            .set("search", search);
        call(self.client, "contact/loadblocked", page.apply(params)).await
    }

    pub async fn load_contact(&self, email: &str) -> Result<Contact, Error> {
        call(self.client, "contact/loadcontact", Params::new().set("email", email)).await
    }

    pub async fn load_history(
        &self,
        email: &str,
        page: Page,
    ) -> Result<Vec<ContactHistory>, Error> {
        let params = page.apply(Params::new().set("email", email));
        call(self.client, "contact/loadhistory", params).await
    }

    /// Adds contacts directly to the account, skipping activation.
    pub async fn quick_add<S: AsRef<str>>(
        &self,
        emails: &[S],
        options: &ContactOptions,
    ) -> Result<(), Error> {
        let params = Params::new().set_list("emails", emails);
        call_unit(self.client, "contact/quickadd", options.apply_for_quick_add(params)).await
    }

    /// Returns the HTML of the public account's subscription form.
    pub async fn subscribe(&self, public_account_id: &str) -> Result<String, Error> {
        let params = Params::new().set("publicAccountID", public_account_id);
        call(self.client, "contact/subscribe", params).await
    }

    pub async fn update(&self, email: &str, update: &ContactUpdate) -> Result<Contact, Error> {
        let params = Params::new()
            .set("email", email)
            .set("firstName", update.first_name.as_ref())
            .set("lastName", update.last_name.as_ref())
            .set("clearRestOfFields", update.clear_rest_of_fields)
            .set("customFields", update.custom_fields.as_ref())
            .set_prefixed(FIELD_PREFIX, &update.fields);
        call(self.client, "contact/update", params).await
    }

    /// Uploads a CSV file of contacts. Returns the number of contacts imported.
    pub async fn upload(
        &self,
        contact_file: impl Into<PathBuf>,
        options: &ContactUploadOptions,
    ) -> Result<i64, Error> {
        let params = Params::new()
            .set("allowUnsubscribe", options.allow_unsubscribe)
            .set("listID", options.list_id)
            .set("listName", options.list_name.as_ref())
            .set("status", options.status.clone())
            .set("consentDate", options.consent_date)
            .set("consentIP", options.consent_ip.as_ref())
            .set("consentTracking", options.consent_tracking.clone());
        let request = Request::post("contact/upload")
            .params_from(params)
            .attachment(contact_file);
        self.client.dispatch(request).await?.into_typed()
    }
}

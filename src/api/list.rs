use super::{DateRange, ExportOptions, call, call_unit, codes};
use crate::client::Client;
use crate::errors::Error;
use crate::models::{ContactList, ExportLink};
use crate::params::Params;
use crate::types::{ContactStatus, LogJobStatus};

/// Which contacts a list operation applies to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListRule {
    /// Contacts matching a segment query, e.g. `Status = Engaged`.
    Rule(String),
    Emails(Vec<String>),
    AllContacts,
}

impl ListRule {
    fn apply(target: Option<&Self>, params: Params) -> Params {
        match target {
            Some(Self::Rule(rule)) => params.set("rule", rule),
            Some(Self::Emails(emails)) => params.set_list("emails", emails),
            Some(Self::AllContacts) => params.set("allContacts", true),
            None => params,
        }
    }
}

/// Contact lists.
#[derive(Clone, Copy, Debug)]
pub struct ListApi<'a> {
    client: &'a Client,
}

impl<'a> ListApi<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Creates a list and returns its ID.
    pub async fn add(
        &self,
        list_name: &str,
        contacts: Option<&ListRule>,
        create_empty_list: bool,
        allow_unsubscribe: bool,
    ) -> Result<i64, Error> {
        let params = Params::new()
            .set("listName", list_name)
            .set("createEmptyList", create_empty_list)
            .set("allowUnsubscribe", allow_unsubscribe);
        call(self.client, "list/add", ListRule::apply(contacts, params)).await
    }

    pub async fn add_contacts(&self, list_name: &str, contacts: &ListRule) -> Result<(), Error> {
        let params = ListRule::apply(Some(contacts), Params::new().set("listName", list_name));
        call_unit(self.client, "list/addcontacts", params).await
    }

    /// Copies a list and returns the new list's ID.
    pub async fn copy(
        &self,
        source_list_name: &str,
        new_list_name: Option<&str>,
        create_empty_list: Option<bool>,
        allow_unsubscribe: Option<bool>,
        rule: Option<&str>,
    ) -> Result<i64, Error> {
        let params = Params::new()
            .set("sourceListName", source_list_name)
            .set("newlistName", new_list_name)
            .set("createEmptyList", create_empty_list)
            .set("allowUnsubscribe", allow_unsubscribe)
            .set("rule", rule);
        call(self.client, "list/copy", params).await
    }

    /// Creates a list from a campaign's recipients, optionally only those in `statuses`.
    pub async fn create_from_campaign(
        &self,
        campaign_id: i32,
        list_name: &str,
        statuses: &[LogJobStatus],
    ) -> Result<(), Error> {
        let params = Params::new()
            .set("campaignID", campaign_id)
            .set("listName", list_name)
            .set_list("statuses", codes(statuses));
        call_unit(self.client, "list/createfromcampaign", params).await
    }

    /// Splits contacts into `number_of_lists` lists by taking every nth contact.
    pub async fn create_nth_selection_lists(
        &self,
        list_name: &str,
        number_of_lists: u32,
        contacts: Option<&ListRule>,
        exclude_blocked: bool,
        allow_unsubscribe: bool,
    ) -> Result<(), Error> {
        let params = Params::new()
            .set("listName", list_name)
            .set("numberOfLists", number_of_lists)
            .set("excludeBlocked", exclude_blocked)
            .set("allowUnsubscribe", allow_unsubscribe);
        let params = ListRule::apply(contacts, params);
        call_unit(self.client, "list/createnthselectionlists", params).await
    }

    /// Creates a list of `count` randomly chosen contacts and returns its ID.
    pub async fn create_random_list(
        &self,
        list_name: &str,
        count: u32,
        contacts: Option<&ListRule>,
        exclude_blocked: bool,
        allow_unsubscribe: bool,
    ) -> Result<i64, Error> {
        let params = Params::new()
            .set("listName", list_name)
            .set("count", count)
            .set("excludeBlocked", exclude_blocked)
            .set("allowUnsubscribe", allow_unsubscribe);
        call(self.client, "list/createrandomlist", ListRule::apply(contacts, params)).await
    }

    pub async fn delete(&self, list_name: &str) -> Result<(), Error> {
        call_unit(self.client, "list/delete", Params::new().set("listName", list_name)).await
    }

    pub async fn export(
        &self,
        list_name: &str,
        options: &ExportOptions,
    ) -> Result<ExportLink, Error> {
        let params = options.apply(Params::new().set("listName", list_name));
        call(self.client, "list/export", params).await
    }

    pub async fn list(&self, range: DateRange) -> Result<Vec<ContactList>, Error> {
        call(self.client, "list/list", range.apply(Params::new())).await
    }

    pub async fn load(&self, list_name: &str) -> Result<ContactList, Error> {
        call(self.client, "list/load", Params::new().set("listName", list_name)).await
    }

    pub async fn move_contacts<S: AsRef<str>>(
        &self,
        old_list_name: &str,
        new_list_name: &str,
        emails: &[S],
        move_all: Option<bool>,
        statuses: &[ContactStatus],
        rule: Option<&str>,
    ) -> Result<(), Error> {
        let params = Params::new()
            .set("oldListName", old_list_name)
            .set("newListName", new_list_name)
            .set_list("emails", emails)
            .set("moveAll", move_all)
            .set_list("statuses", codes(statuses))
            .set("rule", rule);
        call_unit(self.client, "list/movecontacts", params).await
    }

    pub async fn remove_contacts<S: AsRef<str>>(
        &self,
        list_name: &str,
        rule: Option<&str>,
        emails: &[S],
    ) -> Result<(), Error> {
        let params = Params::new()
            .set("listName", list_name)
            .set("rule", rule)
            .set_list("emails", emails);
        call_unit(self.client, "list/removecontacts", params).await
    }

    pub async fn update(
        &self,
        list_name: &str,
        new_list_name: Option<&str>,
        allow_unsubscribe: bool,
    ) -> Result<(), Error> {
        let params = Params::new()
            .set("listName", list_name)
            .set("newListName", new_list_name)
            .set("allowUnsubscribe", allow_unsubscribe);
        call_unit(self.client, "list/update", params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_rule_variants() {
        let rule = ListRule::apply(Some(&ListRule::Rule("Status = 0".into())), Params::new());
        assert_eq!(rule.get("rule"), Some("Status = 0"));

        let emails = ListRule::Emails(vec!["a@example.com".into(), "b@example.com".into()]);
        let params = ListRule::apply(Some(&emails), Params::new());
        assert_eq!(params.get("emails"), Some("a@example.com;b@example.com"));

        let all = ListRule::apply(Some(&ListRule::AllContacts), Params::new());
        assert_eq!(all.get("allContacts"), Some("true"));

        assert!(ListRule::apply(None, Params::new()).is_empty());
    }
}

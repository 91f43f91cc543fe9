use super::{DateRange, Page, call, call_unit};
use crate::client::Client;
use crate::errors::Error;
use crate::models::{
    Account, AccountOverview, AdvancedOptions, EmailCredits, Profile, ReputationHistory,
    SubAccount, SubAccountSettings, Usage, Webhook,
};
use crate::params::Params;
use crate::types::{CreditType, SendingPermission, SubAccountRef, SupportPlan};

/// Optional settings for [`AccountApi::add_sub_account`].
///
/// Fields left as `None` are not sent and take the server default.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubAccountOptions {
    pub allow_2fa: Option<bool>,
    pub requires_email_credits: Option<bool>,
    pub max_contacts: Option<i64>,
    pub enable_private_ip_request: Option<bool>,
    pub send_activation: Option<bool>,
    pub return_url: Option<String>,
    pub sending_permission: Option<SendingPermission>,
    pub enable_contact_features: Option<bool>,
    pub pool_name: Option<String>,
    /// Maximum message size in MB.
    pub email_size_limit: Option<i64>,
    pub daily_send_limit: Option<i64>,
}

impl SubAccountOptions {
    fn apply(&self, params: Params) -> Params {
        params
            .set("allow2fa", self.allow_2fa)
            .set("requiresEmailCredits", self.requires_email_credits)
            .set("maxContacts", self.max_contacts)
            .set("enablePrivateIPRequest", self.enable_private_ip_request)
            .set("sendActivation", self.send_activation)
            .set("returnUrl", self.return_url.as_ref())
            .set("sendingPermission", self.sending_permission.clone())
            .set("enableContactFeatures", self.enable_contact_features)
            .set("poolName", self.pool_name.as_ref())
            .set("emailSizeLimit", self.email_size_limit)
            .set("dailySendLimit", self.daily_send_limit)
    }
}

/// Events a webhook is notified about.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WebhookNotifications {
    pub once_per_email: Option<bool>,
    pub sent: Option<bool>,
    pub opened: Option<bool>,
    pub clicked: Option<bool>,
    pub unsubscribed: Option<bool>,
    pub abuse_report: Option<bool>,
    pub error: Option<bool>,
}

impl WebhookNotifications {
    fn apply(self, params: Params) -> Params {
        params
            .set("notifyOncePerEmail", self.once_per_email)
            .set("notificationForSent", self.sent)
            .set("notificationForOpened", self.opened)
            .set("notificationForClicked", self.clicked)
            .set("notificationForUnsubscribed", self.unsubscribed)
            .set("notificationForAbuseReport", self.abuse_report)
            .set("notificationForError", self.error)
    }
}

/// Account settings, sub-accounts and webhooks.
#[derive(Clone, Copy, Debug)]
pub struct AccountApi<'a> {
    client: &'a Client,
}

impl<'a> AccountApi<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn add_dedicated_support(&self, support_plan: SupportPlan) -> Result<(), Error> {
        let params = Params::new().set("supportPlan", support_plan);
        call_unit(self.client, "account/adddedicatedsupport", params).await
    }

    /// Creates a sub-account and returns its API key.
    pub async fn add_sub_account(
        &self,
        email: &str,
        password: &str,
        confirm_password: &str,
        options: &SubAccountOptions,
    ) -> Result<String, Error> {
        let params = Params::new()
            .set("email", email)
            .set("password", password)
            .set("confirmPassword", confirm_password);
        call(self.client, "account/addsubaccount", options.apply(params)).await
    }

    /// Transfers credits to a sub-account.
    pub async fn add_sub_account_credits(
        &self,
        credits: i64,
        notes: &str,
        credit_type: Option<CreditType>,
        target: Option<&SubAccountRef>,
    ) -> Result<(), Error> {
        let params = Params::new()
            .set("credits", credits)
            .set("notes", notes)
            .set("creditType", credit_type);
        let params = SubAccountRef::apply(target, params);
        call_unit(self.client, "account/addsubaccountcredits", params).await
    }

    /// Registers a webhook and returns its ID.
    pub async fn add_webhook(
        &self,
        web_notification_url: &str,
        name: &str,
        notifications: WebhookNotifications,
    ) -> Result<String, Error> {
        let params = Params::new()
            .set("webNotificationUrl", web_notification_url)
            .set("name", name);
        call(self.client, "account/addwebhook", notifications.apply(params)).await
    }

    /// Starts an email change. Returns the address the confirmation went to.
    pub async fn change_email(
        &self,
        new_email: &str,
        confirm_email: &str,
        source_url: Option<&str>,
    ) -> Result<String, Error> {
        let params = Params::new()
            .set("newEmail", new_email)
            .set("confirmEmail", confirm_email)
            .set("sourceUrl", source_url);
        call(self.client, "account/changeemail", params).await
    }

    pub async fn change_password(
        &self,
        new_password: &str,
        confirm_password: &str,
        reset_api_key: bool,
        current_password: Option<&str>,
    ) -> Result<(), Error> {
        let params = Params::new()
            .set("newPassword", new_password)
            .set("confirmPassword", confirm_password)
            .set("resetApiKey", reset_api_key)
            .set("currentPassword", current_password);
        call_unit(self.client, "account/changepassword", params).await
    }

    pub async fn change_sub_account_password(
        &self,
        new_password: &str,
        confirm_password: &str,
        sub_account_email: &str,
        reset_api_key: bool,
    ) -> Result<(), Error> {
        let params = Params::new()
            .set("newPassword", new_password)
            .set("confirmPassword", confirm_password)
            .set(SubAccountRef::EMAIL_PARAM, sub_account_email)
            .set("resetApiKey", reset_api_key);
        call_unit(self.client, "account/changesubaccountpassword", params).await
    }

    pub async fn delete_sub_account(&self, target: &SubAccountRef) -> Result<(), Error> {
        let params = SubAccountRef::apply(Some(target), Params::new());
        call_unit(self.client, "account/deletesubaccount", params).await
    }

    pub async fn delete_webhook(&self, webhook_id: &str) -> Result<(), Error> {
        let params = Params::new().set("webhookID", webhook_id);
        call_unit(self.client, "account/deletewebhook", params).await
    }

    pub async fn get_sub_account_api_key(&self, target: &SubAccountRef) -> Result<String, Error> {
        let params = SubAccountRef::apply(Some(target), Params::new());
        call(self.client, "account/getsubaccountapikey", params).await
    }

    pub async fn get_sub_account_list(&self, page: Page) -> Result<Vec<SubAccount>, Error> {
        call(self.client, "account/getsubaccountlist", page.apply(Params::new())).await
    }

    pub async fn load(&self) -> Result<Account, Error> {
        call(self.client, "account/load", Params::new()).await
    }

    pub async fn load_advanced_options(&self) -> Result<AdvancedOptions, Error> {
        call(self.client, "account/loadadvancedoptions", Params::new()).await
    }

    pub async fn load_email_credits_history(&self) -> Result<Vec<EmailCredits>, Error> {
        call(self.client, "account/loademailcreditshistory", Params::new()).await
    }

    pub async fn load_reputation_history(
        &self,
        page: Page,
    ) -> Result<Vec<ReputationHistory>, Error> {
        call(self.client, "account/loadreputationhistory", page.apply(Params::new())).await
    }

    /// Loads the settings of a sub-account, or of the calling one when `target` is `None`.
    pub async fn load_sub_account_settings(
        &self,
        target: Option<&SubAccountRef>,
    ) -> Result<SubAccountSettings, Error> {
        let params = SubAccountRef::apply(target, Params::new());
        call(self.client, "account/loadsubaccountsettings", params).await
    }

    pub async fn load_usage(
        &self,
        range: DateRange,
        load_subaccounts_usage: bool,
    ) -> Result<Vec<Usage>, Error> {
        let params = range
            .apply(Params::new())
            .set("loadSubaccountsUsage", load_subaccounts_usage);
        call(self.client, "account/loadusage", params).await
    }

    pub async fn load_webhook(&self, page: Page) -> Result<Vec<Webhook>, Error> {
        call(self.client, "account/loadwebhook", page.apply(Params::new())).await
    }

    pub async fn overview(&self) -> Result<AccountOverview, Error> {
        call(self.client, "account/overview", Params::new()).await
    }

    pub async fn profile_overview(&self) -> Result<Profile, Error> {
        call(self.client, "account/profileoverview", Params::new()).await
    }

    /// Takes credits back from a sub-account. `credits` is ignored when `remove_all` is set.
    pub async fn remove_sub_account_credits(
        &self,
        credit_type: CreditType,
        notes: &str,
        target: Option<&SubAccountRef>,
        credits: Option<i64>,
        remove_all: bool,
    ) -> Result<(), Error> {
        let params = Params::new()
            .set("creditType", credit_type)
            .set("notes", notes);
        let params = SubAccountRef::apply(target, params)
            .set("credits", credits)
            .set("removeAll", remove_all);
        call_unit(self.client, "account/removesubaccountcredits", params).await
    }

    /// Replaces the account's API key and returns the new one.
    ///
    /// Clients built with the old key stop working after this call.
    pub async fn request_new_api_key(&self) -> Result<String, Error> {
        call(self.client, "account/requestnewapikey", Params::new()).await
    }

    pub async fn request_private_ip(&self, count: u32, notes: &str) -> Result<(), Error> {
        let params = Params::new().set("count", count).set("notes", notes);
        call_unit(self.client, "account/requestprivateip", params).await
    }

    pub async fn update_webhook(
        &self,
        webhook_id: &str,
        name: Option<&str>,
        web_notification_url: Option<&str>,
        notifications: WebhookNotifications,
    ) -> Result<(), Error> {
        let params = Params::new()
            .set("webhookID", webhook_id)
            .set("name", name)
            .set("webNotificationUrl", web_notification_url);
        call_unit(self.client, "account/updatewebhook", notifications.apply(params)).await
    }
}

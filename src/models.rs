//! Response and request payloads of the Elastic Email API.
//!
//! Field names follow the API's `PascalCase`. Every field is optional: the
//! API omits or nulls fields freely depending on account type and endpoint.

use crate::types::{
    AccessLevel, CampaignStatus, CampaignTriggerType, CertificateValidationStatus,
    ConsentTracking, ContactHistEventType, ContactSource, ContactStatus, LogJobStatus,
    MessageCategory, SendingPermission, SplitOptimization, TemplateScope, TemplateType,
    TrackingType, TrackingValidationStatus,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Serde adapter for the API's date-time fields.
///
/// Dates are written as `YYYY-MM-DDThh:mm:ss`. Reading also accepts
/// fractional seconds and RFC 3339 offsets (converted to UTC).
pub(crate) mod api_date {
    use crate::params::DATE_FORMAT;
    use chrono::{DateTime, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }
        parse(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date-time: {raw:?}")))
    }

    pub(crate) fn parse(raw: &str) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .or_else(|| {
                DateTime::parse_from_rfc3339(raw)
                    .ok()
                    .map(|date| date.naive_utc())
            })
    }
}

/// An access token and the permissions it grants.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccessToken {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_level: Option<AccessLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, with = "api_date", skip_serializing_if = "Option::is_none")]
    pub last_use: Option<NaiveDateTime>,
}

/// Detailed information about the calling account.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Account {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_code: Option<String>,
    #[serde(rename = "PublicAccountID", skip_serializing_if = "Option::is_none")]
    pub public_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_sub: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_user: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_accounts_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_form_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_private_branding: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_branding_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(rename = "CountryID", skip_serializing_if = "Option::is_none")]
    pub country_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliate_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reputation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_emails_sent: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subaccount_total_emails_sent: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_emails_sent: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_credits: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_email: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_payment_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smtp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smtp_alternative: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_credit_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_credit_level: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_credit_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_send_limit: Option<i32>,
    #[serde(default, with = "api_date", skip_serializing_if = "Option::is_none")]
    pub date_created: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_tracking: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_transfer_encoding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_contact_features: Option<bool>,
    #[serde(rename = "NeedsSMSVerification", skip_serializing_if = "Option::is_none")]
    pub needs_sms_verification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_global_contacts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub untrusted_device_alert_disabled: Option<bool>,
}

/// Headline counters for the calling account.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccountOverview {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_emails_sent: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_per_thousand: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_progress_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked_contacts_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reputation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_account_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_count: Option<i64>,
}

/// Account-wide sending and tracking options.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdvancedOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_click_tracking: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_link_click_tracking: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_template_scripting: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_text_format: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_notification_for_error: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_credit_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_sub_account: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_owned_by_reseller: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_unsubscribe_header: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_subscriptions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_subscribed_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactional_on_unsubscribe: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent_tracking_on_unsubscribe: Option<bool>,
    #[serde(rename = "PreviewMessageID", skip_serializing_if = "Option::is_none")]
    pub preview_message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_custom_headers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_transfer_encoding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_notification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications_emails: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsubscribe_notification_emails: Option<String>,
    #[serde(rename = "EnableUITooltips", skip_serializing_if = "Option::is_none")]
    pub enable_ui_tooltips: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_contact_features: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stale_contact_score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stale_contact_inactive_days: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tutorials_enabled: Option<bool>,
}

/// Contact details of the account owner.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(rename = "CountryID", skip_serializing_if = "Option::is_none")]
    pub country_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketing_consent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

/// One entry of an email credits history.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmailCredits {
    #[serde(default, with = "api_date", skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReputationHistory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abuse_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unknown_users_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opened_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clicked_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_spam_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rep_emails_sent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reputation: Option<f64>,
}

/// A sub-account as listed by `account/getsubaccountlist`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubAccount {
    #[serde(rename = "PublicAccountID", skip_serializing_if = "Option::is_none")]
    pub public_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "MailerID", skip_serializing_if = "Option::is_none")]
    pub mailer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_credits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_email_credits: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_refill_credits: Option<f64>,
    #[serde(rename = "EnablePrivateIPRequest", skip_serializing_if = "Option::is_none")]
    pub enable_private_ip_request: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_emails_sent: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unknown_users_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abuse_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_spam_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reputation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_send_limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_size_limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_contacts: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sending_permission: Option<SendingPermission>,
    #[serde(rename = "HasModify2FA", skip_serializing_if = "Option::is_none")]
    pub has_modify_2fa: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts_count: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubAccountSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_email_credits: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_refill_credits: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_size_limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_send_limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_contacts: Option<i32>,
    #[serde(rename = "EnablePrivateIPRequest", skip_serializing_if = "Option::is_none")]
    pub enable_private_ip_request: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_contact_features: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sending_permission: Option<SendingPermission>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_name: Option<String>,
    #[serde(rename = "PublicAccountID", skip_serializing_if = "Option::is_none")]
    pub public_account_id: Option<String>,
    #[serde(rename = "Allow2FA", skip_serializing_if = "Option::is_none")]
    pub allow_2fa: Option<bool>,
}

/// Usage of one account (or sub-account) over a period.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Usage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_sub_account: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<UsageData>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UsageData {
    #[serde(default, with = "api_date", skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbound_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(rename = "PrivateIPCount", skip_serializing_if = "Option::is_none")]
    pub private_ip_count: Option<i32>,
    #[serde(rename = "PrivateIPCost", skip_serializing_if = "Option::is_none")]
    pub private_ip_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_credits_cost: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_cost: Option<f64>,
}

/// A web notification endpoint and the events it receives.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Webhook {
    #[serde(rename = "WebhookID", skip_serializing_if = "Option::is_none")]
    pub webhook_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, with = "api_date", skip_serializing_if = "Option::is_none")]
    pub date_created: Option<NaiveDateTime>,
    #[serde(default, with = "api_date", skip_serializing_if = "Option::is_none")]
    pub date_updated: Option<NaiveDateTime>,
    #[serde(rename = "URL", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_once_per_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_for_sent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_for_opened: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_for_clicked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_for_unsubscribed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_for_abuse_report: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_for_error: Option<bool>,
}

/// Campaign definition sent to `campaign/add` and `campaign/update`.
///
/// Serialized as JSON into the `campaign` parameter.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Campaign {
    #[serde(rename = "ChannelID", skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CampaignStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_type: Option<CampaignTriggerType>,
    #[serde(default, with = "api_date", skip_serializing_if = "Option::is_none")]
    pub trigger_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_delay: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_frequency: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_count: Option<i32>,
    #[serde(rename = "TriggerChannelID", skip_serializing_if = "Option::is_none")]
    pub trigger_channel_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_channel_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_optimization: Option<SplitOptimization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_optimization_minutes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing_option: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_opens: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_clicks: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_templates: Option<Vec<CampaignTemplate>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CampaignTemplate {
    #[serde(rename = "CampaignTemplateID", skip_serializing_if = "Option::is_none")]
    pub campaign_template_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_template_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CampaignStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_name: Option<String>,
    #[serde(rename = "TemplateID", skip_serializing_if = "Option::is_none")]
    pub template_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_from_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_from_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_reply_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_reply_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_campaign: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_content: Option<String>,
}

/// A campaign or channel as returned by `campaign/list`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CampaignChannel {
    #[serde(rename = "ChannelID", skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_campaign: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_name: Option<String>,
    #[serde(default, with = "api_date", skip_serializing_if = "Option::is_none")]
    pub date_added: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CampaignStatus>,
    #[serde(default, with = "api_date", skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<NaiveDateTime>,
    #[serde(default, with = "api_date", skip_serializing_if = "Option::is_none")]
    pub last_processed: Option<NaiveDateTime>,
    #[serde(rename = "ParentChannelID", skip_serializing_if = "Option::is_none")]
    pub parent_channel_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_channel_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_type: Option<CampaignTriggerType>,
    #[serde(default, with = "api_date", skip_serializing_if = "Option::is_none")]
    pub trigger_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_delay: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_frequency: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_count: Option<i32>,
    #[serde(rename = "TriggerChannelID", skip_serializing_if = "Option::is_none")]
    pub trigger_channel_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_channel_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_optimization: Option<SplitOptimization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_optimization_minutes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing_option: Option<i32>,
    #[serde(rename = "TemplateID", skip_serializing_if = "Option::is_none")]
    pub template_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_from_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_from_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_reply_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_reply_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clicked_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opened_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsubscribed_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_abuse: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_channels: Option<Vec<CampaignChannel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_opens: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_clicks: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_campaign: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_content: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Channel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, with = "api_date", skip_serializing_if = "Option::is_none")]
    pub date_added: Option<NaiveDateTime>,
    #[serde(default, with = "api_date", skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clicked_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opened_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsubscribed_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_abuse: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

/// A single contact and its engagement history counters.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_score: Option<i32>,
    #[serde(default, with = "api_date", skip_serializing_if = "Option::is_none")]
    pub date_added: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ContactStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounced_error_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounced_error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_sent: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_failed: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_opened: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_clicked: Option<i32>,
    #[serde(default, with = "api_date", skip_serializing_if = "Option::is_none")]
    pub first_failed_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_failed_count: Option<i32>,
    #[serde(default, with = "api_date", skip_serializing_if = "Option::is_none")]
    pub date_updated: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ContactSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_error_message: Option<String>,
    #[serde(rename = "CreatedFromIP", skip_serializing_if = "Option::is_none")]
    pub created_from_ip: Option<String>,
    #[serde(rename = "ConsentIP", skip_serializing_if = "Option::is_none")]
    pub consent_ip: Option<String>,
    #[serde(default, with = "api_date", skip_serializing_if = "Option::is_none")]
    pub consent_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent_tracking: Option<ConsentTracking>,
    #[serde(default, with = "api_date", skip_serializing_if = "Option::is_none")]
    pub unsubscribed_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(default, with = "api_date", skip_serializing_if = "Option::is_none")]
    pub last_opened: Option<NaiveDateTime>,
    #[serde(default, with = "api_date", skip_serializing_if = "Option::is_none")]
    pub last_clicked: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<HashMap<String, String>>,
}

/// Lists and segments a contact belongs to.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContactCollection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lists: Option<Vec<ContactContainer>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments: Option<Vec<ContactContainer>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContactContainer {
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContactHistory {
    #[serde(rename = "ContactHistoryID", skip_serializing_if = "Option::is_none")]
    pub contact_history_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type_value: Option<ContactHistEventType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_name: Option<String>,
    #[serde(rename = "IPAddress", skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// Number of contacts in each status.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContactStatusCounts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engaged: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complaint: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsubscribed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounced: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactive: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactional: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stale: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_confirmed: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BlockedContact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_updated: Option<String>,
}

/// A sender domain and the state of its DNS records.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_domain: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spf: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dkim: Option<bool>,
    #[serde(rename = "MX", skip_serializing_if = "Option::is_none")]
    pub mx: Option<bool>,
    #[serde(rename = "DMARC", skip_serializing_if = "Option::is_none")]
    pub dmarc: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_rewrite_domain_valid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify: Option<bool>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub tracking_type: Option<TrackingType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_status: Option<TrackingValidationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_status: Option<CertificateValidationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_validation_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_type_user_request: Option<TrackingType>,
}

/// Result of an SPF check.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ValidationStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_valid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ValidationError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ValidationError {
    #[serde(rename = "TXTRecord", skip_serializing_if = "Option::is_none")]
    pub txt_record: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Identifiers returned by `email/send`.
///
/// `transaction_id` identifies the whole send; `message_id` is only set
/// when there is exactly one recipient.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmailSend {
    #[serde(rename = "TransactionID", skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(rename = "MessageID", skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
}

/// Per-recipient status of a transaction, as returned by `email/getstatus`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmailJobStatus {
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipients_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed: Option<Vec<EmailJobFailedStatus>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivered: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivered_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opened: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opened_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clicked: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clicked_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsubscribed: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsubscribed_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abuse_reports: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abuse_reports_count: Option<i32>,
    #[serde(rename = "MessageIDs", skip_serializing_if = "Option::is_none")]
    pub message_ids: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmailJobFailedStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Delivery status of a single message.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmailStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default, with = "api_date", skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LogJobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_name: Option<String>,
    #[serde(default, with = "api_date", skip_serializing_if = "Option::is_none")]
    pub status_change_date: Option<NaiveDateTime>,
    #[serde(default, with = "api_date", skip_serializing_if = "Option::is_none")]
    pub date_sent: Option<NaiveDateTime>,
    #[serde(default, with = "api_date", skip_serializing_if = "Option::is_none")]
    pub date_opened: Option<NaiveDateTime>,
    #[serde(default, with = "api_date", skip_serializing_if = "Option::is_none")]
    pub date_clicked: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(rename = "TransactionID", skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

/// Rendered content of a sent message.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmailView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

/// An export job and its download link.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Export {
    #[serde(rename = "PublicExportID", skip_serializing_if = "Option::is_none")]
    pub public_export_id: Option<String>,
    #[serde(default, with = "api_date", skip_serializing_if = "Option::is_none")]
    pub date_added: Option<NaiveDateTime>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub export_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, with = "api_date", skip_serializing_if = "Option::is_none")]
    pub log_from: Option<NaiveDateTime>,
    #[serde(default, with = "api_date", skip_serializing_if = "Option::is_none")]
    pub log_to: Option<NaiveDateTime>,
}

/// Download link of a freshly started export.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExportLink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(rename = "PublicExportID", skip_serializing_if = "Option::is_none")]
    pub public_export_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExportTypeCounts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_tracking: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub survey: Option<i64>,
}

/// A stored file (attachment or upload).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct File {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i32>,
    #[serde(default, with = "api_date", skip_serializing_if = "Option::is_none")]
    pub date_added: Option<NaiveDateTime>,
    #[serde(default, with = "api_date", skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

/// A contact list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContactList {
    #[serde(rename = "ListID", skip_serializing_if = "Option::is_none")]
    pub list_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    #[serde(rename = "PublicListID", skip_serializing_if = "Option::is_none")]
    pub public_list_id: Option<String>,
    #[serde(default, with = "api_date", skip_serializing_if = "Option::is_none")]
    pub date_added: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_unsubscribe: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EventLog {
    #[serde(default, with = "api_date", skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDateTime>,
    #[serde(default, with = "api_date", skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipients: Option<Vec<RecipientEvent>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecipientEvent {
    #[serde(rename = "JobID", skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(rename = "MsgID", skip_serializing_if = "Option::is_none")]
    pub msg_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(rename = "ChannelID", skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_try_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "IPAddress", skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(rename = "IPPoolName", skip_serializing_if = "Option::is_none")]
    pub ip_pool_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LinkTrackingDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracked_link: Option<Vec<TrackedLink>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrackedLink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clicks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent: Option<String>,
}

/// Message log for a period.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Log {
    #[serde(default, with = "api_date", skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDateTime>,
    #[serde(default, with = "api_date", skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipients: Option<Vec<Recipient>>,
}

/// One logged delivery attempt.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Recipient {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_sms: Option<bool>,
    #[serde(rename = "MsgID", skip_serializing_if = "Option::is_none")]
    pub msg_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_sent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_opened: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_clicked: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_category: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_category: Option<String>,
    #[serde(rename = "MessageCategoryID", skip_serializing_if = "Option::is_none")]
    pub message_category_id: Option<MessageCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_change_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_try_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub envelope_from: Option<String>,
    #[serde(rename = "JobID", skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_update_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_sid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_last_error: Option<String>,
    #[serde(rename = "IPAddress", skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

/// Aggregated delivery statistics returned by `log/summary`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LogSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_status_summary: Option<LogStatusSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounced_category_summary: Option<BouncedCategorySummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_log_status_summary: Option<Vec<DailyLogStatusSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subaccount_summary: Option<SubaccountSummary>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LogStatusSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipients: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_total: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_total: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivered: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounced: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_progress: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opened: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clicked: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsubscribed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complaints: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbound: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_cancel: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_delivered: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_channel: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BouncedCategorySummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spam: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub black_listed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_mailbox: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grey_listed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throttled: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_problem: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spf_problem: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_problem: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_problem: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whitelisting_problem: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_error: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_delivered: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_cancel: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_terminated: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DailyLogStatusSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivered: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opened: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clicked: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsubscribed: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complaint: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounced: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbound: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_cancel: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_delivered: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubaccountSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emails_sent_today: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emails_sent_this_month: Option<i32>,
}

/// A contact segment and, optionally, its size history.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Segment {
    #[serde(rename = "SegmentID", skip_serializing_if = "Option::is_none")]
    pub segment_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<SegmentHistory>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SegmentHistory {
    #[serde(rename = "SegmentHistoryID", skip_serializing_if = "Option::is_none")]
    pub segment_history_id: Option<i32>,
    #[serde(rename = "SegmentID", skip_serializing_if = "Option::is_none")]
    pub segment_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

/// An email template.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Template {
    #[serde(rename = "TemplateID", skip_serializing_if = "Option::is_none")]
    pub template_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_type: Option<TemplateType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, with = "api_date", skip_serializing_if = "Option::is_none")]
    pub date_added: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_amp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_text: Option<String>,
    #[serde(rename = "OriginalTemplateID", skip_serializing_if = "Option::is_none")]
    pub original_template_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_template_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_scope: Option<TemplateScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Templates and drafts returned by `template/getlist`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates: Option<Vec<Template>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft_template: Option<Vec<Template>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft_templates_count: Option<i32>,
}

/// A template tag.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateTag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateTagList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TemplateTag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_tags: Option<Vec<TemplateTag>>,
}

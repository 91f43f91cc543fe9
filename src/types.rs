//! Integer-coded enumerations and small value types used on the wire.
//!
//! Every enum here is `#[non_exhaustive]` and carries an `Unknown` variant.
//! When the API returns a code this library doesn't recognize, the raw value
//! is preserved in `Unknown` and a warning is logged. Enable the
//! `strict-unknown` feature to turn that into a deserialization error
//! instead.

use crate::params::{IntoParam, Params};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

macro_rules! wire_name {
    ($variant:ident) => {
        stringify!($variant)
    };
    ($variant:ident, $wire:literal) => {
        $wire
    };
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $code:literal $(as $wire:literal)?,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        #[non_exhaustive]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// Unrecognized value, preserved as received.
            Unknown(serde_json::Value),
        }

        impl $name {
            /// Integer code sent on the wire. `None` for unknown values.
            #[must_use]
            pub const fn code(&self) -> Option<i64> {
                match self {
                    $(Self::$variant => Some($code),)+
                    Self::Unknown(_) => None,
                }
            }

            #[must_use]
            pub fn from_code(code: i64) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Looks a variant up by its wire name, ignoring case.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                $(
                    if name.eq_ignore_ascii_case(wire_name!($variant $(, $wire)?)) {
                        return Some(Self::$variant);
                    }
                )+
                None
            }

            /// Wire name of a known variant.
            #[must_use]
            pub const fn name(&self) -> Option<&'static str> {
                match self {
                    $(Self::$variant => Some(wire_name!($variant $(, $wire)?)),)+
                    Self::Unknown(_) => None,
                }
            }

            #[must_use]
            pub const fn is_unknown(&self) -> bool {
                matches!(self, Self::Unknown(_))
            }

            /// Returns the raw value if this is an unknown variant.
            #[must_use]
            pub fn unknown_data(&self) -> Option<&serde_json::Value> {
                match self {
                    Self::Unknown(data) => Some(data),
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match (self.name(), self) {
                    (Some(name), _) => f.write_str(name),
                    (None, Self::Unknown(data)) => write!(f, "Unknown({data})"),
                    (None, _) => Ok(()),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                match (self.code(), self) {
                    (Some(code), _) => serializer.serialize_i64(code),
                    (None, Self::Unknown(data)) => data.serialize(serializer),
                    (None, _) => serializer.serialize_none(),
                }
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let value = serde_json::Value::deserialize(deserializer)?;
                let known = match &value {
                    serde_json::Value::Number(n) => n.as_i64().and_then(Self::from_code),
                    serde_json::Value::String(s) => Self::from_name(s)
                        .or_else(|| s.trim().parse().ok().and_then(Self::from_code)),
                    _ => None,
                };
                match known {
                    Some(variant) => Ok(variant),
                    None => unknown_value(stringify!($name), value).map(Self::Unknown),
                }
            }
        }

        impl IntoParam for $name {
            fn into_param(self) -> Option<String> {
                match self {
                    Self::Unknown(serde_json::Value::String(s)) => Some(s),
                    Self::Unknown(serde_json::Value::Null) => None,
                    Self::Unknown(other) => Some(other.to_string()),
                    known => known.code().map(|code| code.to_string()),
                }
            }
        }
    };
}

#[cfg(not(feature = "strict-unknown"))]
fn unknown_value<E: serde::de::Error>(
    type_name: &str,
    value: serde_json::Value,
) -> Result<serde_json::Value, E> {
    tracing::warn!(
        "Encountered unknown {} value {}. \
         This may indicate a new API feature. \
         The value will be preserved in the Unknown variant.",
        type_name,
        value
    );
    Ok(value)
}

#[cfg(feature = "strict-unknown")]
fn unknown_value<E: serde::de::Error>(
    type_name: &str,
    value: serde_json::Value,
) -> Result<serde_json::Value, E> {
    Err(E::custom(format!(
        "Unknown {type_name} value {value}. \
         Strict mode is enabled via the 'strict-unknown' feature flag."
    )))
}

wire_enum! {
    pub enum CampaignStatus {
        Deleted = -1,
        Active = 0,
        Processing = 1,
        Sending = 2,
        Completed = 3,
        Paused = 4,
        Cancelled = 5,
        Draft = 6,
    }
}

wire_enum! {
    pub enum CampaignTriggerType {
        SendNow = 1,
        FutureScheduled = 2,
        OnAdd = 3,
        OnOpen = 4,
        OnClick = 5,
    }
}

wire_enum! {
    /// SSL certificate state of a custom tracking domain.
    pub enum CertificateValidationStatus {
        ErrorOccured = -2,
        CertNotSet = 0,
        Valid = 1,
        NotValid = 2,
    }
}

wire_enum! {
    pub enum CompressionFormat {
        NoCompression = 0 as "None",
        Zip = 1,
    }
}

wire_enum! {
    /// Whether the contact agreed to open and click tracking.
    pub enum ConsentTracking {
        Unspecified = 0 as "Unknown",
        Allow = 1,
        Deny = 2,
    }
}

wire_enum! {
    pub enum ContactHistEventType {
        Opened = 2,
        Clicked = 3,
        Bounced = 10,
        Unsubscribed = 11,
        Complained = 12,
        Activated = 20,
        TransactionalUnsubscribed = 21,
        ManualStatusChange = 22,
        ActivationSent = 24,
        Deleted = 28,
    }
}

wire_enum! {
    pub enum ContactSort {
        Unspecified = 0 as "Unknown",
        DateAddedAsc = 1,
        DateAddedDesc = 2,
        DateUpdatedAsc = 3,
        DateUpdatedDesc = 4,
    }
}

wire_enum! {
    pub enum ContactSource {
        DeliveryApi = 0,
        ManualInput = 1,
        FileUpload = 2,
        WebForm = 3,
        ContactApi = 4,
    }
}

wire_enum! {
    pub enum ContactStatus {
        Transactional = -2,
        Engaged = -1,
        Active = 0,
        Bounced = 1,
        Unsubscribed = 2,
        Abuse = 3,
        Inactive = 4,
        Stale = 5,
        NotConfirmed = 6,
    }
}

wire_enum! {
    pub enum CreditType {
        Email = 9,
    }
}

wire_enum! {
    /// Content transfer encoding of outgoing messages.
    pub enum EncodingType {
        UserProvided = -1,
        NoEncoding = 0 as "None",
        Raw7bit = 1,
        Raw8bit = 2,
        QuotedPrintable = 3,
        Base64 = 4,
        Uue = 5,
    }
}

wire_enum! {
    pub enum ExportFileFormats {
        Csv = 1,
        Xml = 2,
        Json = 3,
    }
}

wire_enum! {
    pub enum ExportStatus {
        Error = -1,
        Loading = 0,
        Ready = 1,
        Expired = 2,
    }
}

wire_enum! {
    pub enum IntervalType {
        Summary = 0,
        Hourly = 1,
    }
}

wire_enum! {
    /// Delivery state of a single logged message.
    pub enum LogEventStatus {
        ReadyToSend = 1,
        WaitingToRetry = 2,
        Sending = 3,
        Error = 4,
        Sent = 5,
        Opened = 6,
        Clicked = 7,
        Unsubscribed = 8,
        AbuseReport = 9,
    }
}

wire_enum! {
    /// Status filter for log queries.
    pub enum LogJobStatus {
        All = 0,
        ReadyToSend = 1,
        WaitingToRetry = 2,
        Sending = 3,
        Error = 4,
        Sent = 5,
        Opened = 6,
        Clicked = 7,
        Unsubscribed = 8,
        AbuseReport = 9,
    }
}

wire_enum! {
    /// Bounce or failure category.
    pub enum MessageCategory {
        Unspecified = 0 as "Unknown",
        Ignore = 1,
        Spam = 2,
        BlackListed = 3,
        NoMailbox = 4,
        GreyListed = 5,
        Throttled = 6,
        Timeout = 7,
        ConnectionProblem = 8,
        SPFProblem = 9,
        AccountProblem = 10,
        DNSProblem = 11,
        NotDeliveredCancelled = 12,
        CodeError = 13,
        ManualCancel = 14,
        ConnectionTerminated = 15,
        NotDelivered = 16,
    }
}

wire_enum! {
    pub enum NotificationType {
        All = 0,
        Email = 1,
        Web = 2,
    }
}

wire_enum! {
    /// Channels a sub-account may send through.
    pub enum SendingPermission {
        NoPermission = 0 as "None",
        Smtp = 1,
        HttpApi = 2,
        SmtpAndHttpApi = 3,
        EEInterface = 4,
        SmtpAndInterface = 5,
        HttpApiAndInterface = 6,
        UseAccessLevel = 16,
        All = 255,
    }
}

wire_enum! {
    pub enum SplitOptimization {
        Opened = 0,
        Clicked = 1,
    }
}

wire_enum! {
    pub enum SupportPlan {
        Priority = 1,
        Premium = 2,
    }
}

wire_enum! {
    pub enum TemplateScope {
        EEPrivate = 0,
        EEPublic = 1,
        Draft = 2,
    }
}

wire_enum! {
    pub enum TemplateType {
        RawHTML = 0,
        DragDropEditor = 1,
    }
}

wire_enum! {
    /// How a custom tracking domain is served.
    pub enum TrackingType {
        NoTracking = -2 as "None",
        EEDelete = -1,
        Http = 0,
        ExternalHttps = 1,
        InternalCertHttps = 2,
        LetsEncryptCert = 3,
    }
}

wire_enum! {
    pub enum TrackingValidationStatus {
        Validated = 0,
        NotValidated = 1,
        Invalid = 2,
        Broken = 3,
    }
}

/// Permission flags of an access token.
///
/// ```
/// use elasticemail_rs::types::AccessLevel;
///
/// let level = AccessLevel::VIEW_ACCOUNT | AccessLevel::SEND_HTTP;
/// assert!(level.contains(AccessLevel::SEND_HTTP));
/// assert_eq!(level.bits(), 17179869185);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessLevel(u64);

impl AccessLevel {
    pub const NONE: Self = Self(0);
    pub const VIEW_ACCOUNT: Self = Self(1);
    pub const VIEW_CONTACTS: Self = Self(1 << 1);
    pub const VIEW_FORMS: Self = Self(1 << 2);
    pub const VIEW_TEMPLATES: Self = Self(1 << 3);
    pub const VIEW_CAMPAIGNS: Self = Self(1 << 4);
    pub const VIEW_CHANNELS: Self = Self(1 << 5);
    pub const VIEW_AUTOMATIONS: Self = Self(1 << 6);
    pub const VIEW_SURVEYS: Self = Self(1 << 7);
    pub const VIEW_SETTINGS: Self = Self(1 << 8);
    pub const VIEW_BILLING: Self = Self(1 << 9);
    pub const VIEW_SUB_ACCOUNTS: Self = Self(1 << 10);
    pub const VIEW_USERS: Self = Self(1 << 11);
    pub const VIEW_FILES: Self = Self(1 << 12);
    pub const VIEW_REPORTS: Self = Self(1 << 13);
    pub const MODIFY_ACCOUNT: Self = Self(1 << 14);
    pub const MODIFY_CONTACTS: Self = Self(1 << 15);
    pub const MODIFY_FORMS: Self = Self(1 << 16);
    pub const MODIFY_TEMPLATES: Self = Self(1 << 17);
    pub const MODIFY_CAMPAIGNS: Self = Self(1 << 18);
    pub const MODIFY_CHANNELS: Self = Self(1 << 19);
    pub const MODIFY_AUTOMATIONS: Self = Self(1 << 20);
    pub const MODIFY_SURVEYS: Self = Self(1 << 21);
    pub const MODIFY_FILES: Self = Self(1 << 22);
    pub const EXPORT: Self = Self(1 << 23);
    pub const SEND_SMTP: Self = Self(1 << 24);
    pub const SEND_SMS: Self = Self(1 << 25);
    pub const MODIFY_SETTINGS: Self = Self(1 << 26);
    pub const MODIFY_BILLING: Self = Self(1 << 27);
    pub const MODIFY_PROFILE: Self = Self(1 << 28);
    pub const MODIFY_SUB_ACCOUNTS: Self = Self(1 << 29);
    pub const MODIFY_USERS: Self = Self(1 << 30);
    pub const SECURITY: Self = Self(1 << 31);
    pub const MODIFY_LANGUAGE: Self = Self(1 << 32);
    pub const VIEW_SUPPORT: Self = Self(1 << 33);
    pub const SEND_HTTP: Self = Self(1 << 34);
    pub const MODIFY_2FA: Self = Self(1 << 35);
    pub const MODIFY_SUPPORT: Self = Self(1 << 36);
    pub const VIEW_CUSTOM_FIELDS: Self = Self(1 << 37);
    pub const MODIFY_CUSTOM_FIELDS: Self = Self(1 << 38);
    pub const MODIFY_WEB_NOTIFICATIONS: Self = Self(1 << 39);
    pub const EXTENDED_LOGS: Self = Self(1 << 40);

    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Returns `true` if every flag in `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for AccessLevel {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for AccessLevel {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl IntoParam for AccessLevel {
    fn into_param(self) -> Option<String> {
        Some(self.0.to_string())
    }
}

/// Identifies a sub-account by its email or its public account ID.
///
/// The API accepts one or the other, never both.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubAccountRef {
    Email(String),
    PublicAccountId(String),
}

impl SubAccountRef {
    pub(crate) const EMAIL_PARAM: &'static str = "subAccountEmail";
    pub(crate) const PUBLIC_ID_PARAM: &'static str = "publicAccountID";

    #[must_use]
    pub fn email(email: impl Into<String>) -> Self {
        Self::Email(email.into())
    }

    #[must_use]
    pub fn public_account_id(id: impl Into<String>) -> Self {
        Self::PublicAccountId(id.into())
    }

    /// Adds the matching parameter. `None` targets the calling account.
    pub(crate) fn apply(target: Option<&Self>, params: Params) -> Params {
        match target {
            Some(Self::Email(email)) => params.set(Self::EMAIL_PARAM, email),
            Some(Self::PublicAccountId(id)) => params.set(Self::PUBLIC_ID_PARAM, id),
            None => params,
        }
    }
}

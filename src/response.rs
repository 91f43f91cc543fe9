//! The `{success, error, data}` envelope every endpoint answers with.

use crate::errors::Error;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Wire-level response wrapper returned by the API for every call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,
    /// Present when `success` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Present on success for calls that return a payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Any other top-level fields, preserved as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Envelope {
    /// Returns the payload if `data` is present and neither `null` nor `false`.
    #[must_use]
    pub fn payload(&self) -> Option<&Value> {
        self.data
            .as_ref()
            .filter(|data| !matches!(data, Value::Null | Value::Bool(false)))
    }
}

/// Result of a successful dispatch.
///
/// Some endpoints answer with a discrete `data` payload, others only signal
/// completion. Match on the variant rather than assuming a payload.
///
/// ```
/// use elasticemail_rs::{ApiResponse, Envelope};
/// use serde_json::json;
///
/// let envelope: Envelope = serde_json::from_value(json!({"success": true})).unwrap();
/// let response = ApiResponse::from(envelope);
/// assert!(!response.is_payload());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum ApiResponse {
    /// The envelope's `data` value.
    Payload(Value),
    /// The full envelope, returned when there is no usable `data`.
    Envelope(Envelope),
}

impl From<Envelope> for ApiResponse {
    fn from(mut envelope: Envelope) -> Self {
        if envelope.payload().is_none() {
            return ApiResponse::Envelope(envelope);
        }
        match envelope.data.take() {
            Some(data) => ApiResponse::Payload(data),
            None => ApiResponse::Envelope(envelope),
        }
    }
}

impl ApiResponse {
    #[must_use]
    pub const fn is_payload(&self) -> bool {
        matches!(self, ApiResponse::Payload(_))
    }

    #[must_use]
    pub fn payload(&self) -> Option<&Value> {
        match self {
            ApiResponse::Payload(data) => Some(data),
            ApiResponse::Envelope(_) => None,
        }
    }

    #[must_use]
    pub fn into_payload(self) -> Option<Value> {
        match self {
            ApiResponse::Payload(data) => Some(data),
            ApiResponse::Envelope(_) => None,
        }
    }

    #[must_use]
    pub fn envelope(&self) -> Option<&Envelope> {
        match self {
            ApiResponse::Envelope(envelope) => Some(envelope),
            ApiResponse::Payload(_) => None,
        }
    }

    /// Deserializes the payload into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingPayload`] for the envelope variant and
    /// [`Error::Decode`] if the payload does not match `T`.
    pub fn into_typed<T: DeserializeOwned>(self) -> Result<T, Error> {
        match self {
            ApiResponse::Payload(data) => serde_json::from_value(data).map_err(|e| {
                Error::Decode(format!(
                    "payload does not match {}: {e}",
                    std::any::type_name::<T>()
                ))
            }),
            ApiResponse::Envelope(envelope) => Err(Error::MissingPayload(format!(
                "expected {} but the envelope carried no data (data = {:?})",
                std::any::type_name::<T>(),
                envelope.data
            ))),
        }
    }
}

//! Named request parameters and their wire-string conversion.
//!
//! Every endpoint takes a flat set of `name=value` pairs. [`Params`] keeps
//! them in insertion order and remembers absent values so that optional
//! arguments can be passed straight through; absent entries are never
//! transmitted.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Separator used when a list-valued argument is flattened into one parameter.
pub const LIST_SEPARATOR: &str = ";";

/// Date format the API expects for date-time parameters.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Converts a typed argument into its wire string.
///
/// Returning `None` marks the parameter as absent.
pub trait IntoParam {
    fn into_param(self) -> Option<String>;
}

impl IntoParam for String {
    fn into_param(self) -> Option<String> {
        Some(self)
    }
}

impl IntoParam for &str {
    fn into_param(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoParam for &String {
    fn into_param(self) -> Option<String> {
        Some(self.clone())
    }
}

/// Booleans are sent as `"true"` / `"false"`.
impl IntoParam for bool {
    fn into_param(self) -> Option<String> {
        Some(if self { "true" } else { "false" }.to_string())
    }
}

macro_rules! display_param {
    ($($ty:ty),+) => {
        $(
            impl IntoParam for $ty {
                fn into_param(self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )+
    };
}

display_param!(i32, i64, u32, u64, usize, f64);

impl IntoParam for NaiveDateTime {
    fn into_param(self) -> Option<String> {
        Some(self.format(DATE_FORMAT).to_string())
    }
}

impl IntoParam for DateTime<Utc> {
    fn into_param(self) -> Option<String> {
        self.naive_utc().into_param()
    }
}

impl<T: IntoParam> IntoParam for Option<T> {
    fn into_param(self) -> Option<String> {
        self.and_then(IntoParam::into_param)
    }
}

/// Insertion-ordered request parameters.
///
/// # Example
///
/// ```
/// use elasticemail_rs::Params;
///
/// let params = Params::new()
///     .set("tokenName", "deploy")
///     .set("tokenNameNew", None::<String>)
///     .set_list("emails", ["a@example.com", "b@example.com"]);
///
/// assert_eq!(params.get("emails"), Some("a@example.com;b@example.com"));
/// assert!(params.contains_key("tokenNameNew"));
/// assert_eq!(params.present().count(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, Option<String>)>,
}

impl Params {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl IntoParam) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets a parameter. An existing key keeps its position and gets the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl IntoParam) {
        let key = key.into();
        let value = value.into_param();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Sets a list-valued parameter, joined with `;`. An empty list is absent.
    #[must_use]
    pub fn set_list<I, S>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = values
            .into_iter()
            .map(|v| v.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR);
        self.insert(key, (!joined.is_empty()).then_some(joined));
        self
    }

    /// Expands a dictionary into one `{prefix}{key}` parameter per entry.
    ///
    /// ```
    /// use elasticemail_rs::Params;
    ///
    /// let params = Params::new().set_prefixed("field_", [("city", "London")]);
    /// assert_eq!(params.get("field_city"), Some("London"));
    /// ```
    #[must_use]
    pub fn set_prefixed<I, K, V>(mut self, prefix: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoParam,
    {
        for (key, value) in entries {
            self.insert(format!("{prefix}{}", key.as_ref()), value);
        }
        self
    }

    /// Returns the value of a present parameter.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Returns `true` if the key was set, even to an absent value.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Iterates the parameters that will be transmitted, in insertion order.
    pub fn present(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (k.as_str(), v)))
    }

    /// All keys, absent ones included.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of entries, absent ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if at least one entry has a value.
    #[must_use]
    pub fn has_present(&self) -> bool {
        self.present().next().is_some()
    }
}

impl<K: Into<String>, V: IntoParam> FromIterator<(K, V)> for Params {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

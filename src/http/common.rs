use crate::errors::Error;
use std::fmt;
use std::str::FromStr;

// --- URL Construction ---

/// Base URL of the Elastic Email v2 API. Ends with the path separator.
pub const DEFAULT_BASE_URL: &str = "https://api.elasticemail.com/v2/";

/// Parameter name the API key is sent under.
///
/// The v2 API only accepts the key as a regular parameter, so it travels in
/// the query string, the form body or a multipart field depending on the
/// request shape.
pub const API_KEY_PARAM: &str = "apikey";

/// HTTP methods the API accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive; anything but `GET` or `POST` is [`Error::InvalidMethod`].
impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            _ => Err(Error::InvalidMethod(s.to_string())),
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        }
    }
}

/// Joins the base URL and a relative endpoint path.
///
/// Plain concatenation: the base URL is expected to end with `/`.
#[must_use]
pub fn resolve_url(base_url: &str, path: &str) -> String {
    format!("{base_url}{path}")
}

/// Encodes pairs as `application/x-www-form-urlencoded` (also used for query strings).
#[must_use]
pub fn encode_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    pairs
        .into_iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Appends an encoded query string to a path.
#[must_use]
pub fn append_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        return path.to_string();
    }
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{path}{separator}{query}")
}

//! Wire-level debugging via LOUD_WIRE environment variable.
//!
//! When `LOUD_WIRE` is set to any value, prints every request the dispatcher
//! sends and every response it receives to stderr with colors.
//!
//! # Usage
//!
//! ```bash
//! LOUD_WIRE=1 cargo run --example account_overview
//! ```
//!
//! # Output Format
//!
//! - Green `>>>` for outgoing requests (URL, form fields, multipart parts)
//! - Red `<<<` for incoming responses
//! - Timestamps and request IDs for correlation
//!
//! The `apikey` parameter is always printed as `***`. Long message bodies in
//! responses are truncated to keep output readable.

use super::common::API_KEY_PARAM;
use super::transport::{Part, RequestBody};
use colored::Colorize;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Request ID counter for correlating requests with responses
static REQUEST_COUNTER: AtomicUsize = AtomicUsize::new(1);

/// Cached check for whether LOUD_WIRE is enabled
static ENABLED: OnceLock<bool> = OnceLock::new();

const REDACTED: &str = "***";

/// Check if LOUD_WIRE debugging is enabled.
///
/// The result is cached after first check. `LOUD_WIRE` must be set before
/// the first API call is made.
#[must_use]
pub fn is_enabled() -> bool {
    *ENABLED.get_or_init(|| std::env::var("LOUD_WIRE").is_ok())
}

/// Get the next request ID for correlation.
#[must_use]
pub fn next_request_id() -> usize {
    REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Response fields holding message content, which can be arbitrarily long.
const TRUNCATE_FIELDS: &[&str] = &["Body", "BodyHtml", "BodyText", "BodyAmp", "Css"];

/// Maximum length before truncation (keep first 100 chars).
const TRUNCATE_THRESHOLD: usize = 100;

/// Truncate long message-content fields in a JSON value.
fn truncate_long_fields(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, val) in map.iter_mut() {
                if TRUNCATE_FIELDS.contains(&key.as_str()) {
                    if let serde_json::Value::String(s) = val
                        && s.len() > TRUNCATE_THRESHOLD
                    {
                        *s = super::error_helpers::truncate_for_context(s, TRUNCATE_THRESHOLD);
                    }
                } else {
                    truncate_long_fields(val);
                }
            }
        }
        serde_json::Value::Array(arr) => {
            for item in arr.iter_mut() {
                truncate_long_fields(item);
            }
        }
        _ => {}
    }
}

/// Replaces the value of every `apikey=` pair in an encoded query or form string.
pub(crate) fn redact_encoded(encoded: &str) -> String {
    encoded
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, _)) if key == API_KEY_PARAM => format!("{key}={REDACTED}"),
            _ => pair.to_string(),
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Redacts the query string portion of a URL.
pub(crate) fn redact_url(url: &str) -> String {
    match url.split_once('?') {
        Some((base, query)) => format!("{base}?{}", redact_encoded(query)),
        None => url.to_string(),
    }
}

fn timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Log prefix with timestamp and request ID.
fn prefix(request_id: usize) -> String {
    let ts = timestamp().dimmed();
    format!(
        "{} {} {}",
        "[LOUD_WIRE]".bold(),
        ts,
        format!("[REQ#{}]", request_id).cyan()
    )
}

/// Log an outgoing HTTP request.
pub fn log_request(request_id: usize, method: &str, url: &str, body: &RequestBody) {
    if !is_enabled() {
        return;
    }

    let prefix = prefix(request_id);
    let direction = ">>>".green().bold();

    eprintln!("{prefix} {direction} {method} {}", redact_url(url));

    match body {
        RequestBody::Empty => {}
        RequestBody::Form(encoded) => {
            eprintln!("{prefix} {}:", "Form".green());
            for pair in redact_encoded(encoded).split('&') {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                let value = urlencoding::decode(value)
                    .map(|v| v.into_owned())
                    .unwrap_or_else(|_| value.to_string());
                eprintln!("{prefix}   {key} = {value}");
            }
        }
        RequestBody::Multipart(parts) => {
            eprintln!("{prefix} {}:", "Multipart".green());
            for part in parts {
                match part {
                    Part::Text { name, .. } if name == API_KEY_PARAM => {
                        eprintln!("{prefix}   {name} = {REDACTED}");
                    }
                    Part::Text { name, value } => eprintln!("{prefix}   {name} = {value}"),
                    Part::File(file) => {
                        log_upload_start(request_id, &file.name, &file.file_name, file.len);
                    }
                }
            }
        }
    }
}

/// Log a streamed file part.
pub fn log_upload_start(request_id: usize, part_name: &str, file_name: &str, size: u64) {
    if !is_enabled() {
        return;
    }

    let prefix = prefix(request_id);
    let direction = ">>>".green().bold();
    let size_mb = size as f64 / 1_048_576.0;

    eprintln!(
        "{prefix} {direction} {} {part_name} \"{file_name}\" ({size_mb:.2} MB)",
        "UPLOAD".green().bold()
    );
}

/// Log an incoming HTTP response status.
pub fn log_response_status(request_id: usize, status: u16) {
    if !is_enabled() {
        return;
    }

    let prefix = prefix(request_id);
    let direction = "<<<".red().bold();
    let status_text = if status < 300 {
        format!("{status} OK").green()
    } else {
        format!("{status} ERROR").red()
    };

    eprintln!("{prefix} {direction} {status_text}");
}

/// Log an incoming HTTP response body.
pub fn log_response_body(request_id: usize, body: &[u8]) {
    if !is_enabled() {
        return;
    }

    let prefix = prefix(request_id);

    if let Ok(mut parsed) = serde_json::from_slice::<serde_json::Value>(body) {
        truncate_long_fields(&mut parsed);
        eprintln!("{prefix} {}:", "Response".red());
        if let Ok(colored) = colored_json::to_colored_json_auto(&parsed) {
            for line in colored.lines() {
                eprintln!("{prefix} {line}");
            }
        } else if let Ok(pretty) = serde_json::to_string_pretty(&parsed) {
            for line in pretty.lines() {
                eprintln!("{prefix} {line}");
            }
        }
    } else {
        let text = String::from_utf8_lossy(body);
        let truncated = super::error_helpers::truncate_for_context(&text, 1000);
        eprintln!("{prefix} {}: {truncated}", "Response".red());
    }
}

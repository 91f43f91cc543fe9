//! Turning raw HTTP responses into envelopes or contextual errors.

use crate::errors::Error;
use crate::response::Envelope;

/// Maximum characters to include from a response body in error messages
const ERROR_BODY_PREVIEW_LENGTH: usize = 200;

/// Decodes a raw response body into an [`Envelope`].
///
/// A non-2xx status is only an error when the body is not an envelope: the
/// API reports some failures as `{"success": false, ...}` with a 4xx status,
/// and those must surface as API errors with their message.
///
/// # Errors
///
/// - [`Error::HttpStatus`] for a non-2xx status whose body is not an envelope
/// - [`Error::Decode`] for a 2xx body that is not JSON or lacks `success`
pub fn decode_envelope(status: u16, body: &[u8]) -> Result<Envelope, Error> {
    let text = String::from_utf8_lossy(body);
    match serde_json::from_slice::<Envelope>(body) {
        Ok(envelope) => Ok(envelope),
        Err(_) if !(200..300).contains(&status) => Err(Error::HttpStatus {
            status_code: status,
            message: truncate_for_context(&text, ERROR_BODY_PREVIEW_LENGTH),
        }),
        Err(e) => Err(Error::Decode(format_json_parse_error(&text, e))),
    }
}

/// Checks a response whose successful body is not an envelope.
///
/// # Errors
///
/// - [`Error::Api`] if the body is a failure envelope
/// - [`Error::HttpStatus`] for any other non-2xx status
pub fn check_raw(status: u16, body: &[u8]) -> Result<(), Error> {
    if let Ok(envelope) = serde_json::from_slice::<Envelope>(body)
        && !envelope.success
    {
        return Err(Error::Api(envelope.error.unwrap_or_default()));
    }
    if !(200..300).contains(&status) {
        let text = String::from_utf8_lossy(body);
        return Err(Error::HttpStatus {
            status_code: status,
            message: truncate_for_context(&text, ERROR_BODY_PREVIEW_LENGTH),
        });
    }
    Ok(())
}

/// Formats JSON parsing context by including a preview of the raw body.
pub fn format_json_parse_error(json_str: &str, error: serde_json::Error) -> String {
    let preview = truncate_for_context(json_str, ERROR_BODY_PREVIEW_LENGTH);
    format!("JSON parse error: {} | Context: {}", error, preview)
}

/// Truncates a string to specified length, adding "..." if truncated.
///
/// Uses character-boundary-aware slicing to prevent panics on multi-byte UTF-8 characters.
pub(crate) fn truncate_for_context(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let truncate_at = s
            .char_indices()
            .take_while(|(i, c)| i + c.len_utf8() <= max_len)
            .last()
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        format!("{}...", &s[..truncate_at])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success_envelope() {
        let envelope = decode_envelope(200, br#"{"success":true,"data":"abc"}"#).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.data, Some(serde_json::json!("abc")));
    }

    #[test]
    fn test_decode_failure_envelope_with_error_status() {
        let envelope =
            decode_envelope(400, br#"{"success":false,"error":"Invalid apikey"}"#).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.error.as_deref(), Some("Invalid apikey"));
    }

    #[test]
    fn test_decode_non_json_with_error_status() {
        let err = decode_envelope(502, b"<html>Bad Gateway</html>").unwrap_err();
        match err {
            Error::HttpStatus {
                status_code,
                message,
            } => {
                assert_eq!(status_code, 502);
                assert!(message.contains("Bad Gateway"));
            }
            other => panic!("expected HttpStatus, got {other:?}"),
        }
    }

    #[test]
    fn test_check_raw() {
        assert!(check_raw(200, b"name,email\nAda,ada@example.com").is_ok());
        let err = check_raw(200, br#"{"success":false,"error":"File not found"}"#).unwrap_err();
        assert!(matches!(err, Error::Api(ref m) if m == "File not found"));
        let err = check_raw(404, b"missing").unwrap_err();
        assert!(matches!(err, Error::HttpStatus { status_code: 404, .. }));
    }

    #[test]
    fn test_decode_non_json_with_ok_status() {
        let err = decode_envelope(200, b"not json").unwrap_err();
        assert!(matches!(err, Error::Decode(ref m) if m.contains("not json")));
    }

    #[test]
    fn test_decode_missing_success_field() {
        let err = decode_envelope(200, br#"{"data":1}"#).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_format_json_parse_error() {
        let json = r#"{"invalid": }"#;
        let err = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
        let result = format_json_parse_error(json, err);

        assert!(result.contains("JSON parse error"));
        assert!(result.contains("Context:"));
        assert!(result.contains(r#"{"invalid": }"#));
    }

    #[test]
    fn test_truncate_for_context_long_string() {
        let long_str = "a".repeat(300);
        let result = truncate_for_context(&long_str, 200);
        assert_eq!(result.len(), 203);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_truncate_for_context_utf8_boundary() {
        // 198 + 4 = 202 bytes total
        let emoji_str = "x".repeat(198) + "🎉";
        let result = truncate_for_context(&emoji_str, 200);

        assert_eq!(result.len(), 201);
        assert!(result.starts_with("xxx"));
        assert!(!result.contains("🎉"));
    }

    #[test]
    fn test_truncate_for_context_exactly_at_boundary() {
        let exact = "a".repeat(200);
        assert_eq!(truncate_for_context(&exact, 200), exact);
    }
}

//! Log sanitization utilities
//!
//! Keeps passwords and API token secrets out of debug/error logs and
//! stops large search results from flooding the log file.

use serde_json::Value;

/// Maximum number of characters to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// JSON keys whose values are replaced before a body is logged.
const SENSITIVE_KEYS: &[&str] = &["password", "confirm_password", "secret"];

const REDACTED: &str = "***";

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit,
/// otherwise returns the first `TRUNCATE_LIMIT` bytes with a suffix
/// indicating the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Redact sensitive JSON fields, then truncate.
///
/// Non-JSON text is only truncated.
pub fn redact_for_log(s: &str) -> String {
    match serde_json::from_str::<Value>(s) {
        Ok(mut value) => {
            redact_value(&mut value);
            truncate_for_log(&value.to_string())
        }
        Err(_) => truncate_for_log(s),
    }
}

fn redact_value(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, inner) in map.iter_mut() {
                if SENSITIVE_KEYS.contains(&key.as_str()) {
                    *inner = Value::String(REDACTED.to_string());
                } else {
                    redact_value(inner);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(redact_value),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_unchanged() {
        let s = "hello world";
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn over_limit_truncated() {
        let s = "a".repeat(TRUNCATE_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
        assert!(result.contains(&format!("{} bytes]", TRUNCATE_LIMIT + 100)));
        assert!(result.len() < s.len());
    }

    #[test]
    fn multibyte_chars_safe() {
        let s = "日志".repeat(200);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
    }

    #[test]
    fn password_is_redacted() {
        let body = r#"{"email":"a@b.c","password":"hunter2"}"#;
        let result = redact_for_log(body);
        assert!(!result.contains("hunter2"));
        assert!(result.contains("a@b.c"));
    }

    #[test]
    fn nested_token_secrets_are_redacted() {
        let body = r#"{"tokens":[{"id":"t1","secret":"s1"},{"id":"t2","secret":"s2"}]}"#;
        let result = redact_for_log(body);
        assert!(!result.contains("s1"));
        assert!(!result.contains("s2"));
        assert!(result.contains("t2"));
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(redact_for_log("bad gateway"), "bad gateway");
    }
}

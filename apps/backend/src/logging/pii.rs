//! PII-safe log formatting.
//!
//! Log fields that may carry an email address or an opaque credential go
//! through `Redacted` so raw identifiers never reach the log stream.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Email pattern: matches standard email addresses
/// SAFETY: vetted literal, compiles successfully
fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap()
    });
    &EMAIL_REGEX
}

/// Opaque token pattern: base64-like or hex runs of 16+ chars
/// SAFETY: vetted literal, compiles successfully
fn token_regex() -> &'static Regex {
    static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"\b[A-Za-z0-9+/_-]{16,}={0,2}\b").unwrap()
    });
    &TOKEN_REGEX
}

/// Redact sensitive information from a string.
///
/// Emails keep the first character of the local part and the full domain;
/// opaque token runs are replaced wholesale.
pub fn redact(input: &str) -> String {
    let masked = email_regex().replace_all(input, |caps: &regex::Captures<'_>| {
        match caps[0].split_once('@') {
            Some((local, domain)) => {
                let first = local.chars().next().unwrap_or('*');
                format!("{first}***@{domain}")
            }
            None => "***".to_string(),
        }
    });
    token_regex().replace_all(&masked, "[REDACTED_TOKEN]").into_owned()
}

/// Display wrapper that redacts on the way into a log field.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", redact(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emails_keep_first_char_and_domain() {
        assert_eq!(
            redact("reached worker@example.com today"),
            "reached w***@example.com today"
        );
    }

    #[test]
    fn opaque_tokens_are_masked() {
        let out = redact("sub 110248495921238986420 linked");
        assert_eq!(out, "sub [REDACTED_TOKEN] linked");
    }

    #[test]
    fn short_strings_pass_through() {
        assert_eq!(redact("hub shift filled"), "hub shift filled");
    }
}

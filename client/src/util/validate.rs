//! Contact form validation.
//!
//! Intentionally permissive: the goal is catching obvious typos before the
//! visitor is handed off to WhatsApp, not RFC-grade enforcement.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// A plausible email: one `@` with a non-empty local part and a domain
/// containing at least one dot, with no whitespace anywhere.
#[must_use]
pub fn is_valid_email(input: &str) -> bool {
    let input = input.trim();
    if input.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && tld.len() >= 2
}

/// A plausible Brazilian phone number: 10 or 11 digits after stripping
/// punctuation, optionally preceded by the country code 55.
#[must_use]
pub fn is_valid_phone(input: &str) -> bool {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if input.chars().any(|c| !c.is_ascii_digit() && !"()-+. ".contains(c)) {
        return false;
    }
    let national = digits.strip_prefix("55").filter(|rest| rest.len() >= 10).unwrap_or(&digits);
    matches!(national.len(), 10 | 11)
}

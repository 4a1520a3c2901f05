// SPDX-License-Identifier: MPL-2.0
//! Pure helpers shared by the views: email format checks, required-field
//! checks and display capitalization.

use regex::Regex;
use std::sync::OnceLock;

/// `localpart@domain.tld`: non-empty local part, a domain containing at least
/// one dot, no whitespace anywhere.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"))
}

/// Returns `true` when `email` looks like a deliverable address.
#[must_use]
pub fn validate_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Returns `true` when `value` contains something other than whitespace.
#[must_use]
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Uppercases the first character and leaves the rest untouched.
///
/// ```
/// use oh_snap::validation::capitalize_first_letter;
///
/// assert_eq!(capitalize_first_letter("portraits"), "Portraits");
/// assert_eq!(capitalize_first_letter(""), "");
/// ```
#[must_use]
pub fn capitalize_first_letter(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

//! # Field validators
//!
//! Pure checks for the three user fields. Each validator takes the current
//! field value and returns a human-readable message, or an empty string when
//! the value is acceptable. Checks run in a fixed order and the first failure
//! wins, so a value that is both too short and badly formed reports the
//! character problem first.
//!
//! Missing input is represented by `""`; none of these functions panic.
//!
//! The email check restricts addresses to [`EMAIL_PROVIDER_ALLOWLIST`]. That
//! list is a product rule, not a technical limitation of address syntax.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::Field;

/// Email domains accepted by [`validate_email`].
pub const EMAIL_PROVIDER_ALLOWLIST: [&str; 16] = [
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "live.com",
    "aol.com",
    "icloud.com",
    "protonmail.com",
    "zoho.com",
    "rediffmail.com",
    "yandex.com",
    "fastmail.com",
    "gmx.com",
    "mail.ru",
    "qq.com",
    "163.com",
];

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 50;
pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 20;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("valid name pattern"));
static USERNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("valid username pattern"));
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Validate a display name: letters and whitespace, 2 to 50 characters once trimmed.
pub fn validate_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return "Name is required".to_string();
    }
    if !NAME_PATTERN.is_match(name) {
        return "Name should only contain letters and spaces".to_string();
    }
    let len = trimmed.chars().count();
    if len < NAME_MIN_LEN {
        return format!("Name should be at least {NAME_MIN_LEN} characters long");
    }
    if len > NAME_MAX_LEN {
        return format!("Name should not exceed {NAME_MAX_LEN} characters");
    }
    String::new()
}

/// Validate a username: `[A-Za-z0-9_]`, 3 to 20 characters, no leading or
/// trailing underscore, no leading digit.
pub fn validate_username(username: &str) -> String {
    if username.trim().is_empty() {
        return "Username is required".to_string();
    }
    if !USERNAME_PATTERN.is_match(username) {
        return "Username can only contain letters, numbers, and underscores".to_string();
    }
    // Pattern above guarantees ASCII, so byte length is character length.
    let len = username.len();
    if len < USERNAME_MIN_LEN {
        return format!("Username should be at least {USERNAME_MIN_LEN} characters long");
    }
    if len > USERNAME_MAX_LEN {
        return format!("Username should not exceed {USERNAME_MAX_LEN} characters");
    }
    if username.starts_with('_') || username.ends_with('_') {
        return "Username cannot start or end with underscore".to_string();
    }
    if username.starts_with(|c: char| c.is_ascii_digit()) {
        return "Username cannot start with a number".to_string();
    }
    String::new()
}

/// Validate an optional email address against the format and provider allowlist.
pub fn validate_email(email: &str) -> String {
    if email.trim().is_empty() {
        return String::new();
    }
    if !EMAIL_PATTERN.is_match(email) {
        return "Please enter a valid email address".to_string();
    }
    let domain = email
        .split_once('@')
        .map(|(_, domain)| domain.to_lowercase())
        .unwrap_or_default();
    if !EMAIL_PROVIDER_ALLOWLIST.contains(&domain.as_str()) {
        return "Please use a common email provider like Gmail, Yahoo, Outlook, etc.".to_string();
    }
    String::new()
}

/// Run the validator belonging to `field`.
pub fn validate_field(field: Field, value: &str) -> String {
    match field {
        Field::Name => validate_name(value),
        Field::Username => validate_username(value),
        Field::Email => validate_email(value),
    }
}

//! Keystroke filtering applied before a value reaches form state.

use crate::models::Field;

/// Strip characters the field can never accept.
///
/// `name` keeps ASCII letters and whitespace, `username` keeps `[A-Za-z0-9_]`
/// and is lower-cased, `email` passes through untouched. Applying the filter
/// to its own output is a no-op.
pub fn filter_input(field: Field, raw: &str) -> String {
    match field {
        Field::Name => raw
            .chars()
            .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
            .collect(),
        Field::Username => raw
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
            .map(|c| c.to_ascii_lowercase())
            .collect(),
        Field::Email => raw.to_string(),
    }
}

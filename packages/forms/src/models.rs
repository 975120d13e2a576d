//! # Domain models for the user forms
//!
//! Defines the record exchanged with the users backend and the small types the
//! form machinery keys on.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`UserRecord`] | The `{ name, username, email }` body sent to and received from `/user`. |
//! | [`UserId`] | The server-assigned identifier of a record. Never generated on the client. |
//! | [`Field`] | One of the three form fields, in display order via [`Field::ALL`]. |
//! | [`FieldErrors`] | Per-field error messages, an empty string meaning valid. |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// A user as exchanged with the backend. Absent and `null` fields read as `""`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl UserRecord {
    pub fn new(
        name: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            username: username.into(),
            email: email.into(),
        }
    }

    /// Borrow the value of one field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Username => &self.username,
            Field::Email => &self.email,
        }
    }

    /// Replace the value of one field.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Username => self.username = value,
            Field::Email => self.email = value,
        }
    }
}

/// Server-assigned record identifier.
///
/// Backends commonly hand out numeric ids; both `42` and `"42"` deserialize
/// to the same value so the id can be placed in a route unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Self(n.to_string()),
            Raw::Text(s) => Self(s),
        })
    }
}

/// A form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Username,
    Email,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Username, Field::Email];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Username => "username",
            Field::Email => "email",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Username => 1,
            Field::Email => 2,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a field name that is not part of the form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "username" => Ok(Field::Username),
            "email" => Ok(Field::Email),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// Per-field validation messages. An empty message means the field is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    messages: [String; 3],
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> &str {
        &self.messages[field.index()]
    }

    pub fn set(&mut self, field: Field, message: String) {
        self.messages[field.index()] = message;
    }

    pub fn clear(&mut self, field: Field) {
        self.messages[field.index()].clear();
    }

    pub fn clear_all(&mut self) {
        for message in &mut self.messages {
            message.clear();
        }
    }

    /// True when any field carries a message.
    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|m| !m.is_empty())
    }

    /// Fields with a message, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL
            .into_iter()
            .map(move |f| (f, self.get(f)))
            .filter(|(_, m)| !m.is_empty())
    }
}

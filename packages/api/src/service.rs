//! The backend seam: three calls against `/user`.

use std::future::Future;

use forms::{Field, UserId, UserRecord};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ApiError;

/// A record as the backend reports it after a create or update.
///
/// The identifier is optional because a backend may answer with an empty body;
/// callers fall back to the id they already know.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredUser {
    #[serde(default)]
    pub id: Option<UserId>,
    #[serde(flatten)]
    pub record: UserRecord,
}

/// Access to the users backend.
pub trait UserService {
    /// `POST /user`
    fn create_user(
        &self,
        record: &UserRecord,
    ) -> impl Future<Output = Result<StoredUser, ApiError>>;

    /// `GET /user/{id}`
    fn fetch_user(&self, id: &UserId) -> impl Future<Output = Result<UserRecord, ApiError>>;

    /// `PUT /user/{id}`
    fn update_user(
        &self,
        id: &UserId,
        record: &UserRecord,
    ) -> impl Future<Output = Result<StoredUser, ApiError>>;
}

/// Interpret the body of a create/update response.
///
/// Only called for 2xx responses, so the save already happened: a body that
/// cannot be read is logged and replaced by what was sent. Accepts the stored
/// record as a JSON object (with or without an `id`), a bare identifier, or an
/// empty body. Whatever the server leaves out is taken from `sent` and
/// `known_id`.
pub fn parse_saved(body: &str, known_id: Option<&UserId>, sent: &UserRecord) -> StoredUser {
    let body = body.trim();
    if body.is_empty() {
        return StoredUser {
            id: known_id.cloned(),
            record: sent.clone(),
        };
    }

    match decode_saved(body, sent) {
        Ok(mut stored) => {
            if stored.id.is_none() {
                stored.id = known_id.cloned();
            }
            stored
        }
        Err(e) => {
            warn!("unreadable body in a successful save response: {e}");
            StoredUser {
                id: known_id.cloned(),
                record: sent.clone(),
            }
        }
    }
}

fn decode_saved(body: &str, sent: &UserRecord) -> Result<StoredUser, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    match &value {
        serde_json::Value::Object(map) => {
            let has_record = Field::ALL.iter().any(|f| map.contains_key(f.as_str()));
            let mut stored: StoredUser = serde_json::from_value(value)?;
            if !has_record {
                stored.record = sent.clone();
            }
            Ok(stored)
        }
        _ => Ok(StoredUser {
            id: Some(serde_json::from_value(value)?),
            record: sent.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sent() -> UserRecord {
        UserRecord::new("Ada Lovelace", "ada", "ada@gmail.com")
    }

    #[test]
    fn test_parse_full_object() {
        let body = r#"{"id":12,"name":"Ada Lovelace","username":"ada","email":"ada@gmail.com"}"#;
        let stored = parse_saved(body, None, &sent());
        assert_eq!(stored.id, Some(UserId::new("12")));
        assert_eq!(stored.record, sent());
    }

    #[test]
    fn test_parse_object_without_id_uses_known_id() {
        let body = r#"{"name":"Ada","username":"ada","email":""}"#;
        let known = UserId::new("3");
        let stored = parse_saved(body, Some(&known), &sent());
        assert_eq!(stored.id, Some(known));
        assert_eq!(stored.record, UserRecord::new("Ada", "ada", ""));
    }

    #[test]
    fn test_parse_bare_identifier() {
        let stored = parse_saved("  41\n", None, &sent());
        assert_eq!(stored.id, Some(UserId::new("41")));
        assert_eq!(stored.record, sent());
    }

    #[test]
    fn test_parse_empty_body() {
        let stored = parse_saved("", None, &sent());
        assert_eq!(stored, StoredUser { id: None, record: sent() });
    }

    #[test]
    fn test_parse_null_field_reads_as_empty() {
        let body = r#"{"id":5,"name":"Ada","username":"ada","email":null}"#;
        let stored = parse_saved(body, None, &sent());
        assert_eq!(stored.id, Some(UserId::new("5")));
        assert_eq!(stored.record, UserRecord::new("Ada", "ada", ""));
    }

    #[test]
    fn test_parse_unreadable_body_falls_back_to_sent() {
        let known = UserId::new("8");
        for body in ["User created", "<html>", "[1, 2]", "true"] {
            let stored = parse_saved(body, Some(&known), &sent());
            assert_eq!(
                stored,
                StoredUser {
                    id: Some(known.clone()),
                    record: sent(),
                },
                "{body:?}"
            );
        }
        assert_eq!(parse_saved("User created", None, &sent()).id, None);
    }

    #[test]
    fn test_parse_object_without_record_fields_keeps_sent() {
        let stored = parse_saved(r#"{"id":9,"status":"ok"}"#, None, &sent());
        assert_eq!(stored.id, Some(UserId::new("9")));
        assert_eq!(stored.record, sent());
    }
}

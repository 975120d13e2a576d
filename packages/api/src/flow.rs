//! # Load and save
//!
//! The two backend round trips a form makes, with their logging and the
//! mapping of [`ApiError`] to the message a form banner shows:
//!
//! - [`load`] fetches the record an edit form starts from.
//! - [`save`] issues the one call a submission ends in (`POST` for create,
//!   `PUT` for edit).
//!
//! Their results feed [`forms::FormState::finish_load`] and
//! [`forms::FormState::finish_submit`] directly.

use forms::{FormMode, UserId, UserRecord};
use tracing::{error, info};

use crate::error::ApiError;
use crate::service::{StoredUser, UserService};

/// Send `record` to the backend as the mode requires.
pub async fn send<S: UserService>(
    service: &S,
    mode: &FormMode,
    record: &UserRecord,
) -> Result<StoredUser, ApiError> {
    match mode {
        FormMode::Create => service.create_user(record).await,
        FormMode::Edit(id) => service.update_user(id, record).await,
    }
}

/// Save `record`, logging the outcome. Errors come back as display text.
pub async fn save<S: UserService>(
    service: &S,
    mode: &FormMode,
    record: &UserRecord,
) -> Result<StoredUser, String> {
    match send(service, mode, record).await {
        Ok(stored) => {
            info!(id = ?stored.id, username = %stored.record.username, "user saved");
            Ok(stored)
        }
        Err(e) => {
            error!("failed to save user: {e}");
            Err(e.to_string())
        }
    }
}

/// Fetch the record behind `id`. Errors come back as display text.
pub async fn load<S: UserService>(service: &S, id: &UserId) -> Result<UserRecord, String> {
    service.fetch_user(id).await.map_err(|e| {
        error!(%id, "failed to load user: {e}");
        e.to_string()
    })
}

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use forms::{UserId, UserRecord};

use crate::error::ApiError;
use crate::service::{StoredUser, UserService};

/// A backend call observed by [`MemoryUserService`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Create(UserRecord),
    Fetch(UserId),
    Update(UserId, UserRecord),
}

#[derive(Debug, Default)]
struct Inner {
    users: BTreeMap<u64, UserRecord>,
    next_id: u64,
    calls: Vec<Call>,
    fail_with: Option<u16>,
}

/// In-memory UserService for testing and the offline desktop mode.
///
/// Ids are handed out sequentially from 1. Every call is recorded, including
/// calls that fail.
#[derive(Clone, Debug, Default)]
pub struct MemoryUserService {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryUserService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record directly, bypassing the call log.
    pub fn insert(&self, record: UserRecord) -> UserId {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.allocate_id();
        inner.users.insert(id, record);
        UserId::new(id.to_string())
    }

    pub fn get(&self, id: &UserId) -> Option<UserRecord> {
        let inner = self.inner.lock().unwrap();
        parse_key(id).and_then(|key| inner.users.get(&key).cloned())
    }

    /// Calls made so far, oldest first.
    pub fn calls(&self) -> Vec<Call> {
        self.inner.lock().unwrap().calls.clone()
    }

    /// True when both handles share the same storage.
    pub fn same_store(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Make every following call fail with the given HTTP status, or succeed
    /// again with `None`.
    pub fn fail_with_status(&self, status: Option<u16>) {
        self.inner.lock().unwrap().fail_with = status;
    }
}

impl Inner {
    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn check_failure(&self) -> Result<(), ApiError> {
        match self.fail_with {
            Some(status) => Err(ApiError::Status { status }),
            None => Ok(()),
        }
    }
}

fn parse_key(id: &UserId) -> Option<u64> {
    id.as_str().parse().ok()
}

impl UserService for MemoryUserService {
    async fn create_user(&self, record: &UserRecord) -> Result<StoredUser, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(Call::Create(record.clone()));
        inner.check_failure()?;

        let id = inner.allocate_id();
        inner.users.insert(id, record.clone());
        Ok(StoredUser {
            id: Some(UserId::new(id.to_string())),
            record: record.clone(),
        })
    }

    async fn fetch_user(&self, id: &UserId) -> Result<UserRecord, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(Call::Fetch(id.clone()));
        inner.check_failure()?;

        parse_key(id)
            .and_then(|key| inner.users.get(&key).cloned())
            .ok_or_else(|| ApiError::NotFound { id: id.clone() })
    }

    async fn update_user(&self, id: &UserId, record: &UserRecord) -> Result<StoredUser, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(Call::Update(id.clone(), record.clone()));
        inner.check_failure()?;

        let slot = parse_key(id)
            .and_then(|key| inner.users.get_mut(&key))
            .ok_or_else(|| ApiError::NotFound { id: id.clone() })?;
        *slot = record.clone();
        Ok(StoredUser {
            id: Some(id.clone()),
            record: record.clone(),
        })
    }
}

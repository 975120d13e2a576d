//! Runtime choice between the HTTP and in-memory services.

use forms::{FrontendConfig, UserId, UserRecord};

use crate::error::ApiError;
use crate::http::HttpUserService;
use crate::memory::MemoryUserService;
use crate::service::{StoredUser, UserService};

/// The service a running app talks to. Cheap to clone.
#[derive(Clone, Debug)]
pub enum Backend {
    Http(HttpUserService),
    Memory(MemoryUserService),
}

impl Backend {
    pub fn http(config: &FrontendConfig) -> Self {
        Backend::Http(HttpUserService::from_config(&config.api))
    }

    pub fn memory() -> Self {
        Backend::Memory(MemoryUserService::new())
    }

    /// Short label for logs and the navbar.
    pub fn describe(&self) -> String {
        match self {
            Backend::Http(service) => service.base_url().to_string(),
            Backend::Memory(_) => "offline".to_string(),
        }
    }
}

impl PartialEq for Backend {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Backend::Http(a), Backend::Http(b)) => a.base_url() == b.base_url(),
            (Backend::Memory(a), Backend::Memory(b)) => a.same_store(b),
            _ => false,
        }
    }
}

impl UserService for Backend {
    async fn create_user(&self, record: &UserRecord) -> Result<StoredUser, ApiError> {
        match self {
            Backend::Http(service) => service.create_user(record).await,
            Backend::Memory(service) => service.create_user(record).await,
        }
    }

    async fn fetch_user(&self, id: &UserId) -> Result<UserRecord, ApiError> {
        match self {
            Backend::Http(service) => service.fetch_user(id).await,
            Backend::Memory(service) => service.fetch_user(id).await,
        }
    }

    async fn update_user(&self, id: &UserId, record: &UserRecord) -> Result<StoredUser, ApiError> {
        match self {
            Backend::Http(service) => service.update_user(id, record).await,
            Backend::Memory(service) => service.update_user(id, record).await,
        }
    }
}

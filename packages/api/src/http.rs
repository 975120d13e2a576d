//! [`UserService`] over HTTP using `reqwest`. Works natively and in the browser.

use forms::config::ApiConfig;
use forms::{UserId, UserRecord};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::service::{parse_saved, StoredUser, UserService};

/// REST client for the users backend.
#[derive(Clone, Debug)]
pub struct HttpUserService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpUserService {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.base_url.as_str())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/user`
    pub fn collection_url(&self) -> String {
        format!("{}/user", self.base_url)
    }

    /// `{base}/user/{id}`
    pub fn user_url(&self, id: &UserId) -> String {
        format!("{}/user/{}", self.base_url, id)
    }

    /// Read the body of a successful response, or turn the status into an error.
    async fn body(response: reqwest::Response) -> Result<String, ApiError> {
        check_status(response.status(), response.url().as_str())?;
        Ok(response.text().await?)
    }
}

/// Any 2xx is a success; everything else is a failure carrying the status.
fn check_status(status: reqwest::StatusCode, url: &str) -> Result<(), ApiError> {
    if status.is_success() {
        return Ok(());
    }
    warn!(%status, %url, "users backend rejected request");
    Err(ApiError::Status {
        status: status.as_u16(),
    })
}

impl UserService for HttpUserService {
    async fn create_user(&self, record: &UserRecord) -> Result<StoredUser, ApiError> {
        let url = self.collection_url();
        debug!(%url, username = %record.username, "creating user");
        let response = self.client.post(&url).json(record).send().await?;
        let body = Self::body(response).await?;
        Ok(parse_saved(&body, None, record))
    }

    async fn fetch_user(&self, id: &UserId) -> Result<UserRecord, ApiError> {
        let url = self.user_url(id);
        debug!(%url, "fetching user");
        let response = self.client.get(&url).send().await?;
        let body = Self::body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn update_user(&self, id: &UserId, record: &UserRecord) -> Result<StoredUser, ApiError> {
        let url = self.user_url(id);
        debug!(%url, username = %record.username, "updating user");
        let response = self.client.put(&url).json(record).send().await?;
        let body = Self::body(response).await?;
        Ok(parse_saved(&body, Some(id), record))
    }
}

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::{UserId, UserRecord},
    protocol::UserPayload,
};
use url::Url;

use crate::error::DirectoryError;

/// The four calls the remote collection supports. The controller only ever
/// talks to this trait; tests substitute a scripted implementation.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// `GET {base}` — the full collection, in server order.
    async fn fetch_all(&self) -> Result<Vec<UserRecord>, DirectoryError>;
    /// `POST {base}` — the server assigns the id and echoes the record.
    async fn create(&self, payload: &UserPayload) -> Result<UserRecord, DirectoryError>;
    /// `PUT {base}/{id}` — echoes the updated record.
    async fn update(&self, id: UserId, payload: &UserPayload)
        -> Result<UserRecord, DirectoryError>;
    /// `DELETE {base}/{id}`.
    async fn remove(&self, id: UserId) -> Result<(), DirectoryError>;
}

/// reqwest-backed implementation addressing a conventional REST collection.
pub struct HttpUserDirectory {
    http: Client,
    base_url: Url,
}

impl HttpUserDirectory {
    /// Validates the collection URL once up front; everything else is
    /// straight string formatting per request.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, url::ParseError> {
        let base_url = Url::parse(base_url.as_ref())?;
        Ok(Self {
            http: Client::new(),
            base_url,
        })
    }

    fn member_url(&self, id: UserId) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), id.0)
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn fetch_all(&self) -> Result<Vec<UserRecord>, DirectoryError> {
        let users = self
            .http
            .get(self.base_url.clone())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(users)
    }

    async fn create(&self, payload: &UserPayload) -> Result<UserRecord, DirectoryError> {
        let record = self
            .http
            .post(self.base_url.clone())
            .json(payload)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(record)
    }

    async fn update(
        &self,
        id: UserId,
        payload: &UserPayload,
    ) -> Result<UserRecord, DirectoryError> {
        let record = self
            .http
            .put(self.member_url(id))
            .json(payload)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(record)
    }

    async fn remove(&self, id: UserId) -> Result<(), DirectoryError> {
        self.http
            .delete(self.member_url(id))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

//! reqwest-backed [`UserApi`] for a jsonplaceholder-style REST endpoint.
//!
//! Endpoints:
//!
//! | Operation | Request |
//! |---|---|
//! | list | `GET {base}/users?_page={page}&_limit={limit}` |
//! | create | `POST {base}/users` |
//! | update | `PUT {base}/users/{id}` |
//! | delete | `DELETE {base}/users/{id}` |

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::{ClientError, UserApi};
use crate::config::ApiConfig;
use crate::models::{User, UserId, UserPayload};

/// HTTP client for the user directory.
#[derive(Debug, Clone)]
pub struct HttpUserApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpUserApi {
    /// Build a client from the API section of the config.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::Request(e.to_string()))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    fn item_url(&self, id: UserId) -> String {
        format!("{}/users/{id}", self.base_url)
    }

    /// Send a request and turn transport failures and non-2xx into errors.
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ClientError> {
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        self.send(request)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[async_trait]
impl UserApi for HttpUserApi {
    async fn list(&self, page: u32, limit: u32) -> Result<Vec<User>, ClientError> {
        tracing::debug!(page, limit, "listing users");
        let request = self
            .client
            .get(self.collection_url())
            .query(&[("_page", page), ("_limit", limit)]);
        self.send_json(request).await
    }

    async fn create(&self, payload: &UserPayload) -> Result<User, ClientError> {
        tracing::debug!(name = %payload.name, "creating user");
        let request = self.client.post(self.collection_url()).json(payload);
        self.send_json(request).await
    }

    async fn update(&self, id: UserId, payload: &UserPayload) -> Result<User, ClientError> {
        tracing::debug!(id, name = %payload.name, "updating user");
        let request = self.client.put(self.item_url(id)).json(payload);
        self.send_json(request).await
    }

    async fn delete(&self, id: UserId) -> Result<(), ClientError> {
        tracing::debug!(id, "deleting user");
        self.send(self.client.delete(self.item_url(id))).await?;
        Ok(())
    }
}

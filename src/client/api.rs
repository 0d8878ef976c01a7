//! HTTP access to the puppy API

use crate::config::ClientConfig;
use crate::core::error::ErrorResponse;
use crate::core::puppy::{NewPuppy, Puppy, PuppyChanges};
use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use thiserror::Error;

/// Failure of a single API call
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-success status
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    /// The request never got an answer (connection refused, bad body, ...)
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    /// Human-readable message, falling back to `fallback` when the error has none
    pub fn describe(&self, fallback: &str) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        }
    }
}

/// The calls the client state store makes against the server
#[async_trait]
pub trait PuppyApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Puppy>, ClientError>;

    async fn create(&self, puppy: &NewPuppy) -> Result<Puppy, ClientError>;

    async fn update(&self, id: i32, changes: &PuppyChanges) -> Result<Puppy, ClientError>;

    async fn delete(&self, id: i32) -> Result<(), ClientError>;
}

/// `PuppyApi` over HTTP/JSON using reqwest
#[derive(Clone, Debug)]
pub struct HttpPuppyApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPuppyApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Pass successful responses through; turn the rest into `ClientError::Api`,
/// preferring the server's `{"error"}` message.
async fn expect_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<ErrorResponse>().await {
        Ok(body) if !body.error.trim().is_empty() => body.error,
        _ => format!("Request failed with status code {}", status.as_u16()),
    };
    Err(ClientError::Api { status, message })
}

#[async_trait]
impl PuppyApi for HttpPuppyApi {
    async fn list(&self) -> Result<Vec<Puppy>, ClientError> {
        let response = self.client.get(self.url("/puppies")).send().await?;
        Ok(expect_success(response).await?.json().await?)
    }

    async fn create(&self, puppy: &NewPuppy) -> Result<Puppy, ClientError> {
        let response = self
            .client
            .post(self.url("/puppies"))
            .json(puppy)
            .send()
            .await?;
        Ok(expect_success(response).await?.json().await?)
    }

    async fn update(&self, id: i32, changes: &PuppyChanges) -> Result<Puppy, ClientError> {
        let response = self
            .client
            .put(self.url(&format!("/puppies/{}", id)))
            .json(changes)
            .send()
            .await?;
        Ok(expect_success(response).await?.json().await?)
    }

    async fn delete(&self, id: i32) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/puppies/{}", id)))
            .send()
            .await?;
        expect_success(response).await?;
        Ok(())
    }
}

use crate::config::ApodConfig;
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApodError {
    #[error("APOD request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("APOD response was not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Anything that can answer a date-range query with the raw APOD response body.
#[async_trait]
pub trait ApodSource: Send + Sync {
    async fn fetch_range(&self, start_date: &str, end_date: &str) -> Result<Value, ApodError>;
}

pub struct ApodClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl ApodClient {
    pub fn new(config: &ApodConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Dates are inserted as given; the API does its own validation.
    pub fn request_url(&self, start_date: &str, end_date: &str) -> String {
        format!(
            "{}?api_key={}&start_date={}&end_date={}",
            self.endpoint, self.api_key, start_date, end_date
        )
    }
}

#[async_trait]
impl ApodSource for ApodClient {
    async fn fetch_range(&self, start_date: &str, end_date: &str) -> Result<Value, ApodError> {
        tracing::debug!(start_date, end_date, "Requesting APOD range");

        let response = self
            .http
            .get(self.request_url(start_date, end_date))
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        let value: Value = serde_json::from_str(&body)?;

        tracing::debug!(status = status.as_u16(), "APOD range received");
        Ok(value)
    }
}

use crate::app_config::AppConfig;
use crate::backend::requests::{CitiesRequest, LocationDraft, StatesRequest};
use crate::backend::responses::{CountryGet, SaveReply};
use crate::domain::Location;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{info, instrument};

/// The backend HTTP surface. One instance per form lifecycle; every call is
/// a single request with no retries.
#[derive(Clone, Debug)]
pub struct Api {
    client: Client,
    base_url: String,
}

impl Api {
    pub fn new(client: Client, config: &AppConfig) -> Self {
        Api {
            client,
            base_url: config.backend().url().trim_end_matches('/').to_string(),
        }
    }

    #[instrument(skip(self))]
    pub async fn countries(&self) -> Result<Vec<String>, ApiError> {
        info!("🌍 Retrieving country catalog...");
        let response = self.client.get(self.url("/api/countries")).send().await?;
        let countries: Vec<CountryGet> = decode(response).await?;
        info!("🌍 Retrieving country catalog... OK, {} found", countries.len());

        Ok(countries.into_iter().map(|country| country.name).collect())
    }

    #[instrument(skip(self))]
    pub async fn states(&self, country: &str) -> Result<Vec<String>, ApiError> {
        let response = self.client.post(self.url("/api/states")).json(&StatesRequest { country }).send().await?;
        decode(response).await
    }

    #[instrument(skip(self))]
    pub async fn cities(&self, country: &str, state: &str) -> Result<Vec<String>, ApiError> {
        let response = self.client.post(self.url("/api/cities")).json(&CitiesRequest { country, state }).send().await?;
        decode(response).await
    }

    #[instrument(skip(self))]
    pub async fn locations(&self) -> Result<Vec<Location>, ApiError> {
        let response = self.client.get(self.url("/api/locations")).send().await?;
        decode(response).await
    }

    #[instrument(skip(self))]
    pub async fn location(&self, id: u32) -> Result<Location, ApiError> {
        let response = self.client.get(self.url(&format!("/api/locations/{id}"))).send().await?;
        decode(response).await
    }

    /// Creates a location and returns the backend's confirmation message.
    #[instrument(skip_all)]
    pub async fn create(&self, draft: &LocationDraft) -> Result<String, ApiError> {
        let response = self.client.post(self.url("/api/locations")).json(draft).send().await?;
        confirmation(response).await
    }

    #[instrument(skip(self, draft))]
    pub async fn update(&self, id: u32, draft: &LocationDraft) -> Result<String, ApiError> {
        let response = self.client.put(self.url(&format!("/api/locations/{id}"))).json(draft).send().await?;
        confirmation(response).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: u32) -> Result<(), ApiError> {
        let response = self.client.delete(self.url(&format!("/api/locations/{id}"))).send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = ensure_success(response).await?;
    Ok(response.json::<T>().await?)
}

async fn confirmation(response: Response) -> Result<String, ApiError> {
    let response = ensure_success(response).await?;
    let reply = response.json::<SaveReply>().await?;

    // A 2xx body can still carry an error field
    if let Some(error) = reply.error {
        return Err(ApiError::Rejected(error));
    }

    Ok(reply.message.unwrap_or_else(|| "OK".to_string()))
}

async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match response.json::<SaveReply>().await {
        Ok(SaveReply { error: Some(message), .. }) => Err(ApiError::Rejected(message)),
        _ => Err(ApiError::Rejected(format!("request failed with status {status}"))),
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("{0}")]
    Rejected(String),
}

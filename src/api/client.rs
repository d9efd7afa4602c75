use super::traits::PropertySource;
use super::ApiError;
use crate::models::{Property, PropertyId};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, warn};

/// HTTP client for the Urban Nest property API
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client rooted at `base_url` (e.g. `http://localhost:8080/api/properties`)
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        Url::parse(base_url).map_err(|error| ApiError::InvalidUrl(format!("{base_url}: {error}")))?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("urbannest/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<(StatusCode, Option<T>), ApiError> {
        debug!("Fetching URL: {}", url);

        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok((status, None));
        }

        if !status.is_success() {
            warn!("Property API returned status: {}", status);
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        debug!("Downloaded {} bytes of JSON", body.len());

        Ok((status, Some(serde_json::from_str(&body)?)))
    }

    async fn get_list(&self, url: &str, query: &[(&str, &str)]) -> Result<Vec<Property>, ApiError> {
        match self.get_json(url, query).await? {
            (_, Some(properties)) => Ok(properties),
            (status, None) => Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            }),
        }
    }
}

#[async_trait]
impl PropertySource for ApiClient {
    async fn fetch_all(&self) -> Result<Vec<Property>, ApiError> {
        let properties = self.get_list(&self.base_url, &[]).await?;
        info!("Loaded {} properties from {}", properties.len(), self.base_url);
        Ok(properties)
    }

    async fn fetch_by_id(&self, id: PropertyId) -> Result<Property, ApiError> {
        let url = format!("{}/{}", self.base_url, id);
        match self.get_json(&url, &[]).await? {
            (_, Some(property)) => Ok(property),
            (_, None) => Err(ApiError::NotFound(id)),
        }
    }

    async fn search_by_location(&self, location: &str) -> Result<Vec<Property>, ApiError> {
        let location = location.trim();
        if location.is_empty() {
            return self.fetch_all().await;
        }

        let url = format!("{}/search", self.base_url);
        let properties = self.get_list(&url, &[("location", location)]).await?;
        info!("Search for {:?} returned {} properties", location, properties.len());
        Ok(properties)
    }

    fn source_name(&self) -> &'static str {
        "Urban Nest API"
    }
}

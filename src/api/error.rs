use crate::models::PropertyId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Property not found: {0}")]
    NotFound(PropertyId),

    #[error("Property API returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Failed to reach property API: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode property API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid property API URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }

    /// Message shown to the visitor in place of the listings.
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "Property not found",
            _ => "Unable to load properties. Please try again later.",
        }
    }

    /// Message shown on the detail view when one property cannot be loaded.
    pub fn detail_message(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "Property not found",
            _ => "Failed to fetch property details",
        }
    }
}

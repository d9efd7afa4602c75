use super::ApiError;
use crate::models::{Property, PropertyId};
use async_trait::async_trait;

/// Common trait for anything that can serve property records.
/// The reqwest client implements it; tests and offline runs can supply their own.
#[async_trait]
pub trait PropertySource: Send + Sync {
    /// Fetch the whole catalog (`GET /properties`)
    async fn fetch_all(&self) -> Result<Vec<Property>, ApiError>;

    /// Fetch one record; `ApiError::NotFound` when the id is unknown
    async fn fetch_by_id(&self, id: PropertyId) -> Result<Property, ApiError>;

    /// Server-side case-insensitive location search. A blank location returns everything.
    async fn search_by_location(&self, location: &str) -> Result<Vec<Property>, ApiError>;

    /// Get the name of the source
    fn source_name(&self) -> &'static str;
}

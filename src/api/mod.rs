pub mod client;
pub mod error;
pub mod traits;

pub use client::ApiClient;
pub use error::ApiError;
pub use traits::PropertySource;

use crate::models::Property;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Number of listings the home page features
pub const FEATURED_COUNT: usize = 6;

/// The catalog as fetched once at the start of a visit
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub properties: Vec<Property>,
    pub fetched_at: DateTime<Utc>,
}

/// Fetches the catalog. There is no retry or cached fallback; a failure ends the visit.
pub async fn load_catalog(source: &dyn PropertySource) -> Result<Catalog, ApiError> {
    let properties = source.fetch_all().await?;
    Ok(Catalog {
        properties,
        fetched_at: Utc::now(),
    })
}

/// The first `count` records in catalog order.
pub fn featured(properties: &[Property], count: usize) -> &[Property] {
    &properties[..count.min(properties.len())]
}

//! Client-side core of the Urban Nest listings site: property records, the
//! filter/sort/paginate engine behind the listings page, display formatting,
//! contact-form checks, the property API client and the Orion help assistant.

pub mod api;
pub mod assistant;
pub mod config;
pub mod contact;
pub mod format;
pub mod listings;
pub mod models;

pub use api::{ApiClient, ApiError, PropertySource};
pub use config::Config;
pub use listings::{FilterParams, ListingSession, SortKey};
pub use models::{Property, PropertyId};

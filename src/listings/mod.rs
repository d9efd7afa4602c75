pub mod collate;
pub mod filter;
pub mod pagination;
pub mod session;
pub mod types;

pub use filter::{compute_filtered, sort_properties};
pub use pagination::{page_numbers, paginate, Page, PageMarker, DEFAULT_PAGE_SIZE};
pub use session::{ListingSession, ListingView};
pub use types::{FilterControls, FilterParams, SortKey, DEFAULT_MAX_PRICE};

use serde::{Deserialize, Serialize};

/// Upper price bound the listings page submits when the user has not chosen one.
pub const DEFAULT_MAX_PRICE: f64 = 999_999_999.0;

/// Ordering applied after filtering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Keep the catalog order.
    #[default]
    Default,
    PriceAscending,
    PriceDescending,
    LocationAlphabetical,
}

impl SortKey {
    /// Maps the sort dropdown tokens onto a key. Unknown tokens keep the catalog order.
    pub fn from_token(token: &str) -> Self {
        match token.trim() {
            "price-low" => SortKey::PriceAscending,
            "price-high" => SortKey::PriceDescending,
            "location" => SortKey::LocationAlphabetical,
            _ => SortKey::Default,
        }
    }

    pub fn as_token(&self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::PriceAscending => "price-low",
            SortKey::PriceDescending => "price-high",
            SortKey::LocationAlphabetical => "location",
        }
    }
}

/// Search, location, price and sort criteria for the listings page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterParams {
    /// Case-insensitive substring matched against the location
    pub search_text: String,
    /// Category label (usually a city) that must appear in the location
    pub location_filter: String,
    /// Inclusive lower bound; `None` means no bound
    pub min_price: Option<f64>,
    /// Inclusive upper bound; `None` means no bound
    pub max_price: Option<f64>,
    pub sort: SortKey,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            location_filter: String::new(),
            min_price: Some(0.0),
            max_price: Some(DEFAULT_MAX_PRICE),
            sort: SortKey::Default,
        }
    }
}

impl FilterParams {
    /// Reads the current control values. Bounds that do not parse as a finite
    /// number are dropped rather than rejected.
    pub fn from_controls(controls: &dyn FilterControls) -> Self {
        Self {
            search_text: controls.search_text().trim().to_lowercase(),
            location_filter: controls.location_filter().to_string(),
            min_price: parse_price_bound(controls.min_price()),
            max_price: parse_price_bound(controls.max_price()),
            sort: SortKey::from_token(controls.sort_by()),
        }
    }

    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search_text: text.into(),
            ..Self::default()
        }
    }

    /// The text the count label reports as the active filter, if any.
    pub fn active_filter(&self) -> Option<&str> {
        if !self.search_text.is_empty() {
            Some(&self.search_text)
        } else if !self.location_filter.is_empty() {
            Some(&self.location_filter)
        } else {
            None
        }
    }

    pub fn is_unbounded_price(&self) -> bool {
        let min_open = self.min_price.map_or(true, |min| min <= 0.0);
        let max_open = self.max_price.map_or(true, |max| max >= DEFAULT_MAX_PRICE);
        min_open && max_open
    }
}

/// Raw values of the filter controls, as the page would read them
pub trait FilterControls {
    fn search_text(&self) -> &str;
    fn location_filter(&self) -> &str;
    fn min_price(&self) -> &str;
    fn max_price(&self) -> &str;
    fn sort_by(&self) -> &str;
}

pub fn parse_price_bound(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

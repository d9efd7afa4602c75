use super::collate::locale_compare;
use super::types::{FilterParams, SortKey};
use crate::models::Property;
use tracing::debug;

/// Filters and sorts the full catalog. The result depends only on `all` and
/// `params`; callers must always pass the complete catalog, never a previous result.
pub fn compute_filtered(all: &[Property], params: &FilterParams) -> Vec<Property> {
    let search = params.search_text.to_lowercase();

    let filtered: Vec<Property> = all
        .iter()
        .filter(|property| matches(property, &search, params))
        .cloned()
        .collect();

    debug!(
        "Filter kept {} of {} properties (sort: {})",
        filtered.len(),
        all.len(),
        params.sort.as_token()
    );

    sort_properties(filtered, params.sort)
}

fn matches(property: &Property, search: &str, params: &FilterParams) -> bool {
    if !search.is_empty() && !property.location.to_lowercase().contains(search) {
        return false;
    }

    if !params.location_filter.is_empty() && !property.location.contains(&params.location_filter) {
        return false;
    }

    if let Some(min) = params.min_price {
        if property.price < min {
            return false;
        }
    }

    if let Some(max) = params.max_price {
        if property.price > max {
            return false;
        }
    }

    true
}

/// Stable sort: records with equal keys keep their relative order.
pub fn sort_properties(mut properties: Vec<Property>, sort: SortKey) -> Vec<Property> {
    match sort {
        SortKey::Default => {}
        SortKey::PriceAscending => properties.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDescending => properties.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::LocationAlphabetical => {
            properties.sort_by(|a, b| locale_compare(&a.location, &b.location))
        }
    }
    properties
}

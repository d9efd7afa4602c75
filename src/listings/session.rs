use super::filter::compute_filtered;
use super::pagination::{page_numbers, paginate, total_pages, Page, PageMarker};
use super::types::FilterParams;
use crate::format::{property_count_label, range_summary};
use crate::models::Property;
use serde::Serialize;
use tracing::{debug, info};

/// What the listings screen renders after each event
#[derive(Debug, Clone, Serialize)]
pub struct ListingView {
    pub page: Page<Property>,
    pub page_numbers: Vec<PageMarker>,
    pub count_label: String,
    /// Present only when there is more than one page
    pub range_summary: Option<String>,
}

/// State of one listings-page visit: the fetched catalog, the active
/// filters, the derived result and the page being shown.
#[derive(Debug, Clone)]
pub struct ListingSession {
    all: Vec<Property>,
    filtered: Vec<Property>,
    params: FilterParams,
    current_page: usize,
    page_size: usize,
}

impl ListingSession {
    pub fn new(all: Vec<Property>, page_size: usize) -> Self {
        Self {
            filtered: all.clone(),
            all,
            params: FilterParams::default(),
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Starts a session the way a `?location=` link does: the value becomes
    /// the search text and filters are applied straight away.
    pub fn with_initial_search(all: Vec<Property>, page_size: usize, location: &str) -> Self {
        let mut session = Self::new(all, page_size);
        let location = location.trim();
        if !location.is_empty() {
            session.apply_filters(FilterParams::search(location.to_lowercase()));
        }
        session
    }

    pub fn apply_filters(&mut self, params: FilterParams) {
        self.current_page = 1;
        self.filtered = compute_filtered(&self.all, &params);
        info!(
            "Applied filters: {} of {} properties match",
            self.filtered.len(),
            self.all.len()
        );
        self.params = params;
    }

    /// Drops every filter and restores the catalog in its original order.
    pub fn clear_filters(&mut self) {
        self.params = FilterParams::default();
        self.current_page = 1;
        self.filtered = self.all.clone();
        debug!("Cleared filters, showing all {} properties", self.all.len());
    }

    /// Jumps to `page` as given. Pagination controls only offer valid
    /// targets; `view` pulls anything else back into range.
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page;
    }

    pub fn view(&mut self) -> ListingView {
        let total = self.total_pages();
        self.current_page = self.current_page.clamp(1, total);

        let page = paginate(&self.filtered, self.page_size, self.current_page);
        let summary = page
            .shows_controls()
            .then(|| range_summary(page.range_start, page.range_end, page.total_items));

        ListingView {
            page_numbers: page_numbers(self.current_page, total),
            count_label: self.count_label(),
            range_summary: summary,
            page,
        }
    }

    pub fn count_label(&self) -> String {
        property_count_label(self.filtered.len(), self.params.active_filter())
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.len(), self.page_size)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn params(&self) -> &FilterParams {
        &self.params
    }

    pub fn filtered(&self) -> &[Property] {
        &self.filtered
    }

    pub fn all(&self) -> &[Property] {
        &self.all
    }
}

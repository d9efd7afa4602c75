use serde::Serialize;

/// Listings shown per page on the listings screen
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Above this many pages the page strip is condensed with ellipses.
const FULL_STRIP_MAX_PAGES: usize = 7;

/// One page of an ordered result set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    /// Never below 1; an empty result is one page with no items.
    pub total_pages: usize,
    pub total_items: usize,
    /// 1-based position of the first item on the page, 0 when the page is empty
    pub range_start: usize,
    /// 1-based position of the last item on the page, 0 when the page is empty
    pub range_end: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Pagination controls are only drawn when there is more than one page.
    pub fn shows_controls(&self) -> bool {
        self.total_pages > 1
    }
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Slices out `current_page` (1-based). The page number is taken as given;
/// a page past the end yields an empty slice.
pub fn paginate<T: Clone>(items: &[T], page_size: usize, current_page: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_items = items.len();

    let start = current_page.saturating_sub(1).saturating_mul(page_size);
    let end = current_page.saturating_mul(page_size).min(total_items);
    let slice: &[T] = if start < end { &items[start..end] } else { &[] };

    let (range_start, range_end) = if slice.is_empty() {
        (0, 0)
    } else {
        (start + 1, end)
    };

    Page {
        items: slice.to_vec(),
        current_page,
        total_pages: total_pages(total_items, page_size),
        total_items,
        range_start,
        range_end,
    }
}

/// Entry in the condensed page-number strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageMarker {
    Number(usize),
    Ellipsis,
}

/// Builds the page strip: every page when there are at most seven, otherwise
/// the first page, the last page, and a window around `current` with
/// ellipses standing in for the gaps.
pub fn page_numbers(current: usize, total: usize) -> Vec<PageMarker> {
    if total <= FULL_STRIP_MAX_PAGES {
        return (1..=total).map(PageMarker::Number).collect();
    }

    let mut pages = vec![PageMarker::Number(1)];

    if current > 3 {
        pages.push(PageMarker::Ellipsis);
    }

    let start = current.saturating_sub(1).max(2);
    let end = current.saturating_add(1).min(total - 1);
    pages.extend((start..=end).map(PageMarker::Number));

    if current.saturating_add(2) < total {
        pages.push(PageMarker::Ellipsis);
    }

    pages.push(PageMarker::Number(total));
    pages
}

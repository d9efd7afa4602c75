//! Display helpers shared by the listing cards, the detail view and the filters panel.

use crate::listings::DEFAULT_MAX_PRICE;

/// Description length shown on a listing card
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// Groups the integer part of `price` the South Asian way: the last three
/// digits, then pairs (`1234567` -> `12,34,567`). A fractional part is kept
/// as-is without trailing zeros.
pub fn format_price(price: f64) -> String {
    let sign = if price < 0.0 { "-" } else { "" };
    let rendered = format!("{:.2}", price.abs());
    let (whole, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));

    let mut out = String::from(sign);
    out.push_str(&group_digits(whole));

    let fraction = fraction.trim_end_matches('0');
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }

    out
}

fn group_digits(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

pub fn format_rupees(price: f64) -> String {
    format!("₹{}", format_price(price))
}

/// Cuts `text` to `max_chars` characters and appends `...` when anything was cut.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}...", &text[..cut]),
    }
}

/// Caption for the price range selector.
pub fn price_range_label(min_price: Option<f64>, max_price: Option<f64>) -> String {
    let min = min_price.filter(|min| *min > 0.0);
    let max = max_price.filter(|max| *max < DEFAULT_MAX_PRICE);

    match (min, max) {
        (None, None) => "All Prices".to_string(),
        (None, Some(max)) => format!("Up to {}", format_rupees(max)),
        (Some(min), None) => format!("From {}", format_rupees(min)),
        (Some(min), Some(max)) => format!("{} - {}", format_rupees(min), format_rupees(max)),
    }
}

fn properties_noun(count: usize) -> &'static str {
    if count == 1 {
        "property"
    } else {
        "properties"
    }
}

pub fn property_count_label(count: usize, filter: Option<&str>) -> String {
    match filter {
        Some(filter) => format!(
            "Found {} {} in \"{}\"",
            count,
            properties_noun(count),
            filter
        ),
        None => format!("Showing {} {}", count, properties_noun(count)),
    }
}

pub fn range_summary(range_start: usize, range_end: usize, total: usize) -> String {
    format!(
        "Showing {}-{} of {} properties",
        range_start, range_end, total
    )
}

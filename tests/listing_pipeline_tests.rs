//! Behaviour of the listings pipeline as a whole: filtering, sorting,
//! pagination and the session that ties them together.

use proptest::prelude::*;
use rstest::rstest;
use std::cmp::Ordering;
use urbannest::listings::collate::locale_compare;
use urbannest::listings::{
    compute_filtered, page_numbers, paginate, FilterParams, ListingSession, PageMarker, SortKey,
};
use urbannest::{Property, PropertyId};

const LOCATIONS: [&str; 8] = [
    "Bandra West, Mumbai",
    "Koramangala, Bangalore",
    "Powai, MUMBAI",
    "Baner, Pune",
    "Dwarka, Delhi",
    "Écrin Towers, Pune",
    "Andheri-East, Mumbai",
    "E\u{301}crin Towers, Pune",
];

fn property(id: i64, location: &str, price: f64) -> Property {
    Property {
        id: PropertyId(id),
        title: format!("Listing {id}"),
        location: location.to_string(),
        price,
        description: Some(format!("Description for listing {id}")),
        image_url: None,
    }
}

fn ids(properties: &[Property]) -> Vec<i64> {
    properties.iter().map(|p| p.id.0).collect()
}

fn sort_order(sort: SortKey, a: &Property, b: &Property) -> Ordering {
    match sort {
        SortKey::Default => Ordering::Equal,
        SortKey::PriceAscending => a.price.total_cmp(&b.price),
        SortKey::PriceDescending => b.price.total_cmp(&a.price),
        SortKey::LocationAlphabetical => locale_compare(&a.location, &b.location),
    }
}

fn catalog_strategy() -> impl Strategy<Value = Vec<Property>> {
    prop::collection::vec((0..LOCATIONS.len(), 0u32..20), 0..60).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (loc, price))| property(i as i64, LOCATIONS[loc], price as f64 * 250_000.0))
            .collect()
    })
}

fn params_strategy() -> impl Strategy<Value = FilterParams> {
    (
        prop_oneof![Just(""), Just("mumbai"), Just("PUNE"), Just("west")],
        prop_oneof![Just(""), Just("Mumbai"), Just("Delhi")],
        prop::option::of(0u32..10),
        prop::option::of(0u32..20),
        prop_oneof![
            Just(SortKey::Default),
            Just(SortKey::PriceAscending),
            Just(SortKey::PriceDescending),
            Just(SortKey::LocationAlphabetical),
        ],
    )
        .prop_map(|(search, location, min, max, sort)| FilterParams {
            search_text: search.to_string(),
            location_filter: location.to_string(),
            min_price: min.map(|m| m as f64 * 250_000.0),
            max_price: max.map(|m| m as f64 * 250_000.0),
            sort,
        })
}

proptest! {
    #[test]
    fn prop_filtered_is_subset_without_duplicates(
        all in catalog_strategy(),
        params in params_strategy()
    ) {
        let result = compute_filtered(&all, &params);
        let mut seen = ids(&result);
        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen.len(), result.len());
        for item in &result {
            prop_assert!(all.contains(item));
        }
    }

    #[test]
    fn prop_filtering_is_idempotent(
        all in catalog_strategy(),
        params in params_strategy()
    ) {
        let once = compute_filtered(&all, &params);
        let twice = compute_filtered(&once, &params);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_sorts_are_stable(
        all in catalog_strategy(),
        sort in prop_oneof![
            Just(SortKey::PriceAscending),
            Just(SortKey::PriceDescending),
            Just(SortKey::LocationAlphabetical),
        ]
    ) {
        let params = FilterParams {
            sort,
            min_price: None,
            max_price: None,
            ..FilterParams::default()
        };
        let result = compute_filtered(&all, &params);
        prop_assert_eq!(result.len(), all.len());
        for pair in result.windows(2) {
            let order = sort_order(sort, &pair[0], &pair[1]);
            prop_assert_ne!(order, Ordering::Greater);
            if order == Ordering::Equal {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }

    #[test]
    fn prop_pages_reconstruct_the_sequence(
        items in prop::collection::vec(any::<u16>(), 0..100),
        page_size in 1usize..15
    ) {
        let first = paginate(&items, page_size, 1);
        let mut rebuilt = Vec::new();
        for page_number in 1..=first.total_pages {
            let page = paginate(&items, page_size, page_number);
            prop_assert!(page.items.len() <= page_size);
            rebuilt.extend(page.items);
        }
        prop_assert_eq!(rebuilt, items);
    }

    #[test]
    fn prop_page_strip_is_bounded(total in 1usize..300, seed in any::<usize>()) {
        let current = seed % total + 1;
        let strip = page_numbers(current, total);

        prop_assert_eq!(strip.first(), Some(&PageMarker::Number(1)));
        prop_assert_eq!(strip.last(), Some(&PageMarker::Number(total)));
        prop_assert!(strip.len() <= 7);

        let ellipses = strip.iter().filter(|m| **m == PageMarker::Ellipsis).count();
        prop_assert!(ellipses <= 2);

        let numbers: Vec<usize> = strip
            .iter()
            .filter_map(|m| match m {
                PageMarker::Number(n) => Some(*n),
                PageMarker::Ellipsis => None,
            })
            .collect();
        prop_assert!(numbers.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(numbers.contains(&current));
    }
}

#[test]
fn fourteen_listings_sorted_by_price_span_two_pages() {
    let prices = [700, 1400, 100, 900, 300, 1200, 500, 1100, 200, 800, 1300, 400, 1000, 600];
    let all: Vec<Property> = prices
        .iter()
        .enumerate()
        .map(|(i, price)| property(i as i64, "Baner, Pune", *price as f64))
        .collect();

    let mut session = ListingSession::new(all, 12);
    session.apply_filters(FilterParams {
        sort: SortKey::PriceAscending,
        ..FilterParams::default()
    });

    let first = session.view();
    let first_prices: Vec<f64> = first.page.items.iter().map(|p| p.price).collect();
    let expected: Vec<f64> = (1..=12).map(|n| n as f64 * 100.0).collect();
    assert_eq!(first_prices, expected);
    assert_eq!(first.page.total_pages, 2);
    assert_eq!(first.range_summary.as_deref(), Some("Showing 1-12 of 14 properties"));

    session.go_to_page(2);
    let second = session.view();
    let second_prices: Vec<f64> = second.page.items.iter().map(|p| p.price).collect();
    assert_eq!(second_prices, vec![1300.0, 1400.0]);
}

#[test]
fn search_keeps_matching_records_in_catalog_order() {
    let locations = [
        "Baner, Pune",
        "Bandra, Mumbai",
        "Dwarka, Delhi",
        "Koramangala, Bangalore",
        "Powai, MUMBAI",
        "Salt Lake, Kolkata",
        "Adyar, Chennai",
        "Juhu, mumbai",
        "Gachibowli, Hyderabad",
        "Aundh, Pune",
    ];
    let all: Vec<Property> = locations
        .iter()
        .enumerate()
        .map(|(i, loc)| property(i as i64, loc, 1_000_000.0))
        .collect();

    let result = compute_filtered(&all, &FilterParams::search("mumbai"));
    assert_eq!(ids(&result), vec![1, 4, 7]);
}

#[test]
fn inverted_price_range_is_an_empty_single_page() {
    let all: Vec<Property> = (0..5)
        .map(|i| property(i, "Baner, Pune", 4_000_000.0))
        .collect();
    let mut session = ListingSession::new(all, 12);
    session.apply_filters(FilterParams {
        min_price: Some(5_000_000.0),
        max_price: Some(3_000_000.0),
        ..FilterParams::default()
    });

    let view = session.view();
    assert!(view.page.items.is_empty());
    assert_eq!(view.page.total_pages, 1);
    assert_eq!(view.page.current_page, 1);
    assert_eq!(view.page_numbers, vec![PageMarker::Number(1)]);
}

#[test]
fn clearing_filters_restores_catalog_and_first_page() {
    let all: Vec<Property> = (0..30)
        .map(|i| property(i, LOCATIONS[i as usize % LOCATIONS.len()], (30 - i) as f64))
        .collect();
    let mut session = ListingSession::new(all.clone(), 12);

    session.apply_filters(FilterParams {
        sort: SortKey::PriceAscending,
        ..FilterParams::default()
    });
    session.go_to_page(3);
    assert_eq!(session.view().page.current_page, 3);

    session.clear_filters();
    let view = session.view();
    assert_eq!(view.page.current_page, 1);
    assert_eq!(session.filtered(), all.as_slice());
    assert_eq!(ids(&view.page.items), (0..12).collect::<Vec<_>>());
}

#[rstest]
#[case(SortKey::Default, vec![0, 1, 2, 3])]
#[case(SortKey::PriceAscending, vec![2, 0, 3, 1])]
#[case(SortKey::PriceDescending, vec![1, 3, 0, 2])]
#[case(SortKey::LocationAlphabetical, vec![3, 2, 0, 1])]
fn sort_keys_order_results(#[case] sort: SortKey, #[case] expected: Vec<i64>) {
    let all = vec![
        property(0, "Koramangala, Bangalore", 200.0),
        property(1, "powai, Mumbai", 400.0),
        property(2, "Baner, Pune", 100.0),
        property(3, "Andheri, Mumbai", 300.0),
    ];
    let params = FilterParams {
        sort,
        ..FilterParams::default()
    };
    assert_eq!(ids(&compute_filtered(&all, &params)), expected);
}

#[rstest]
#[case("Mumbai", "", vec![0, 2, 6])]
#[case("", "Pune", vec![3, 5, 7])]
#[case("pune", "Pune", vec![3, 5, 7])]
#[case("west", "Mumbai", vec![0])]
#[case("kolkata", "", vec![])]
fn search_and_location_combine_with_and(
    #[case] search: &str,
    #[case] location: &str,
    #[case] expected: Vec<i64>,
) {
    let all: Vec<Property> = LOCATIONS
        .iter()
        .enumerate()
        .map(|(i, loc)| property(i as i64, loc, 1.0))
        .collect();
    let params = FilterParams {
        search_text: search.to_string(),
        location_filter: location.to_string(),
        ..FilterParams::default()
    };
    assert_eq!(ids(&compute_filtered(&all, &params)), expected);
}

//! Locale ordering for location names, backed by the ICU root collation.
//!
//! Default options: tertiary strength, punctuation not ignored. Canonically
//! equivalent strings compare equal, so a stable sort keeps them in input order.

use icu_collator::{Collator, CollatorOptions};
use std::cmp::Ordering;

thread_local! {
    static ROOT_COLLATOR: Collator = Collator::try_new(&Default::default(), CollatorOptions::new())
        .expect("compiled root collation data is always available");
}

pub fn locale_compare(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR.with(|collator| collator.compare(a, b))
}

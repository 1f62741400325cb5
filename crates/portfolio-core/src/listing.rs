//! Listing Utilities
//!
//! Ordering helpers for content lists. Canonical order is newest first by
//! publication date; the sort is stable, so equal dates keep table order.

use crate::domain::PublishedOn;

/// Anything with a publication date
pub trait Dated {
    fn published(&self) -> PublishedOn;
}

/// All items, newest first
pub fn newest_first<T: Dated>(items: &[T]) -> Vec<&T> {
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by(|a, b| b.published().cmp(&a.published()));
    sorted
}

/// The first `n` items of the canonical order
pub fn most_recent<T: Dated>(items: &[T], n: usize) -> Vec<&T> {
    let mut sorted = newest_first(items);
    sorted.truncate(n);
    sorted
}

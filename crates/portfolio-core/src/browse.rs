//! Category Filter + Lightbox State
//!
//! `Browser` tracks which category is shown and which item, if any, is open
//! in the lightbox:
//!
//! ```text
//! Browsing(filter) --open--> Viewing(filter, index) --close--> Browsing(filter)
//!                              |  ^
//!                              +--+ navigate(next | prev)
//! ```
//!
//! The viewed index always refers to the filtered list for the current
//! filter. Changing the filter closes the lightbox, because the old index
//! means nothing against the new list.
//!
//! The state holds no items; callers pass the full collection to each
//! operation, so the same state type works for any categorized content.

use tracing::debug;

use crate::domain::{Categorized, CategorySet, DomainError, DomainResult, Entity, ALL_CATEGORY};

/// Active category filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    pub fn from_id(id: &str) -> Self {
        if id == ALL_CATEGORY {
            Filter::All
        } else {
            Filter::Category(id.to_string())
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Filter::All => ALL_CATEGORY,
            Filter::Category(id) => id,
        }
    }

    pub fn matches<T: Categorized>(&self, item: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(id) => item.category() == id,
        }
    }
}

/// Lightbox navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Index reached from `index` in a cyclic list of `len` items
pub fn step(index: usize, len: usize, direction: Direction) -> usize {
    debug_assert!(len > 0);
    match direction {
        Direction::Next => (index + 1) % len,
        Direction::Prev => (index + len - 1) % len,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Browser {
    filter: Filter,
    viewing: Option<usize>,
}

impl Browser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn is_active(&self, category_id: &str) -> bool {
        self.filter.id() == category_id
    }

    /// Index into the filtered list of the open item
    pub fn viewing_index(&self) -> Option<usize> {
        self.viewing
    }

    pub fn is_viewing(&self) -> bool {
        self.viewing.is_some()
    }

    /// Items passing the current filter, in collection order
    pub fn visible<'a, T: Categorized>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.filter.matches(*item)).collect()
    }

    /// The open item, if any
    pub fn current<'a, T: Categorized>(&self, items: &'a [T]) -> Option<&'a T> {
        let index = self.viewing?;
        self.visible(items).get(index).copied()
    }

    /// Replace the active filter and close the lightbox.
    ///
    /// Unknown category ids are rejected and leave the state untouched.
    pub fn set_filter(&mut self, category_id: &str, known: &CategorySet) -> DomainResult<()> {
        if category_id != ALL_CATEGORY && !known.contains(category_id) {
            return Err(DomainError::InvalidInput(format!("unknown category '{}'", category_id)));
        }
        debug!(filter = category_id, "set filter");
        self.filter = Filter::from_id(category_id);
        self.viewing = None;
        Ok(())
    }

    /// Open the item with `id` in the lightbox.
    ///
    /// Returns false, leaving the state unchanged, if the item is not in the
    /// filtered list (which includes the list being empty).
    pub fn open<T: Entity + Categorized>(&mut self, items: &[T], id: &T::Id) -> bool {
        let position = self.visible(items).iter().position(|item| item.id() == *id);
        match position {
            Some(index) => {
                debug!(index, "open lightbox");
                self.viewing = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn close(&mut self) {
        self.viewing = None;
    }

    /// Move the lightbox one item forward or back, wrapping around.
    ///
    /// Returns the new index, or None when nothing is open.
    pub fn navigate<T: Categorized>(&mut self, items: &[T], direction: Direction) -> Option<usize> {
        let index = self.viewing?;
        let len = self.visible(items).len();
        if index >= len {
            // Collection no longer matches the index; fall back to browsing
            self.viewing = None;
            return None;
        }
        let next = step(index, len, direction);
        self.viewing = Some(next);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CategoryDef, Photo};

    fn photo(id: u32, category: &str) -> Photo {
        Photo {
            id,
            src: format!("/p/{}.jpg", id),
            alt: String::new(),
            title: format!("Photo {}", id),
            category: category.to_string(),
            description: String::new(),
        }
    }

    fn fixture() -> (Vec<Photo>, CategorySet) {
        let photos = vec![
            photo(1, "travel"),
            photo(2, "professional"),
            photo(3, "professional"),
            photo(4, "personal"),
            photo(5, "professional"),
        ];
        let defs: Vec<CategoryDef> = ["professional", "travel", "personal", "hobby"]
            .iter()
            .map(|id| CategoryDef { id: id.to_string(), name: id.to_string() })
            .collect();
        let set = CategorySet::tally("All", &defs, &photos);
        (photos, set)
    }

    fn ids(items: &[&Photo]) -> Vec<u32> {
        items.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_filter_matches_tally() {
        let (photos, set) = fixture();
        let mut browser = Browser::new();
        for cat in set.iter() {
            browser.set_filter(&cat.id, &set).unwrap();
            let visible = browser.visible(&photos);
            assert_eq!(visible.len(), cat.count, "category {}", cat.id);
            assert!(visible.iter().all(|p| cat.is_all() || p.category == cat.id));
        }
    }

    #[test]
    fn test_all_shows_everything() {
        let (photos, set) = fixture();
        let mut browser = Browser::new();
        browser.set_filter("professional", &set).unwrap();
        browser.set_filter(ALL_CATEGORY, &set).unwrap();
        assert_eq!(ids(&browser.visible(&photos)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_unknown_filter_rejected() {
        let (_, set) = fixture();
        let mut browser = Browser::new();
        browser.set_filter("travel", &set).unwrap();
        assert!(browser.set_filter("space", &set).is_err());
        assert_eq!(browser.filter(), &Filter::Category("travel".to_string()));
    }

    #[test]
    fn test_open_uses_filtered_position() {
        let (photos, set) = fixture();
        let mut browser = Browser::new();
        browser.set_filter("professional", &set).unwrap();
        assert!(browser.open(&photos, &5));
        assert_eq!(browser.viewing_index(), Some(2));
        assert_eq!(browser.current(&photos).unwrap().id, 5);
    }

    #[test]
    fn test_reopen_same_item_same_index() {
        let (photos, _) = fixture();
        let mut browser = Browser::new();
        browser.open(&photos, &3);
        let first = browser.viewing_index();
        browser.close();
        assert!(!browser.is_viewing());
        browser.open(&photos, &3);
        assert_eq!(browser.viewing_index(), first);
    }

    #[test]
    fn test_open_outside_filter_is_noop() {
        let (photos, set) = fixture();
        let mut browser = Browser::new();
        browser.set_filter("travel", &set).unwrap();
        assert!(!browser.open(&photos, &2));
        assert!(!browser.is_viewing());
    }

    #[test]
    fn test_empty_category_cannot_open() {
        let (photos, set) = fixture();
        let mut browser = Browser::new();
        browser.set_filter("hobby", &set).unwrap();
        assert!(browser.visible(&photos).is_empty());
        assert!(!browser.open(&photos, &1));
        assert_eq!(browser.navigate(&photos, Direction::Next), None);
    }

    #[test]
    fn test_navigate_cycles_back() {
        let (photos, _) = fixture();
        let n = photos.len();
        for start in [1u32, 3, 5] {
            let mut browser = Browser::new();
            browser.open(&photos, &start);
            let origin = browser.viewing_index();
            for _ in 0..n {
                browser.navigate(&photos, Direction::Next);
            }
            assert_eq!(browser.viewing_index(), origin);
            for _ in 0..n {
                browser.navigate(&photos, Direction::Prev);
            }
            assert_eq!(browser.viewing_index(), origin);
        }
    }

    #[test]
    fn test_navigate_wraps() {
        let (photos, set) = fixture();
        let mut browser = Browser::new();
        browser.set_filter("professional", &set).unwrap();
        browser.open(&photos, &2);
        assert_eq!(browser.navigate(&photos, Direction::Prev), Some(2));
        assert_eq!(browser.current(&photos).unwrap().id, 5);
        assert_eq!(browser.navigate(&photos, Direction::Next), Some(0));
        assert_eq!(browser.current(&photos).unwrap().id, 2);
    }

    #[test]
    fn test_single_item_navigation_is_noop() {
        let (photos, set) = fixture();
        let mut browser = Browser::new();
        browser.set_filter("travel", &set).unwrap();
        browser.open(&photos, &1);
        assert_eq!(browser.navigate(&photos, Direction::Next), Some(0));
        assert_eq!(browser.navigate(&photos, Direction::Prev), Some(0));
        assert_eq!(browser.current(&photos).unwrap().id, 1);
    }

    #[test]
    fn test_navigate_requires_viewing() {
        let (photos, _) = fixture();
        let mut browser = Browser::new();
        assert_eq!(browser.navigate(&photos, Direction::Next), None);
    }

    #[test]
    fn test_filter_change_closes_lightbox() {
        let (photos, set) = fixture();
        let mut browser = Browser::new();
        browser.open(&photos, &4);
        browser.set_filter("professional", &set).unwrap();
        assert!(!browser.is_viewing());
        assert!(browser.current(&photos).is_none());
    }

    #[test]
    fn test_stale_index_falls_back_to_browsing() {
        let (photos, _) = fixture();
        let mut browser = Browser::new();
        browser.open(&photos, &5);
        let shrunk = &photos[..2];
        assert_eq!(browser.navigate(shrunk, Direction::Next), None);
        assert!(!browser.is_viewing());
    }

    #[test]
    fn test_step() {
        assert_eq!(step(0, 3, Direction::Prev), 2);
        assert_eq!(step(2, 3, Direction::Next), 0);
        assert_eq!(step(0, 1, Direction::Next), 0);
    }
}

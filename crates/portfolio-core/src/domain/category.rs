//! Categories
//!
//! Grouping keys used to filter a collection. Counts are tallied from the
//! collection itself, so they cannot drift from it.

use serde::{Deserialize, Serialize};

/// Id of the pseudo-category that matches every item
pub const ALL_CATEGORY: &str = "all";

/// Anything that can be filtered by category
pub trait Categorized {
    fn category(&self) -> &str;
}

/// Declared category, as written in the content table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDef {
    pub id: String,
    pub name: String,
}

/// Category with its member count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub count: usize,
}

impl Category {
    pub fn is_all(&self) -> bool {
        self.id == ALL_CATEGORY
    }

    /// Button label, e.g. "Travel (1)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.count)
    }
}

/// Known categories in display order; the "all" entry always comes first
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategorySet {
    categories: Vec<Category>,
}

impl CategorySet {
    /// Count items per declared category.
    ///
    /// Declared categories without members are kept with a zero count.
    pub fn tally<T: Categorized>(all_label: &str, defs: &[CategoryDef], items: &[T]) -> Self {
        let mut categories = Vec::with_capacity(defs.len() + 1);
        categories.push(Category {
            id: ALL_CATEGORY.to_string(),
            name: all_label.to_string(),
            count: items.len(),
        });
        for def in defs.iter().filter(|d| d.id != ALL_CATEGORY) {
            let count = items.iter().filter(|item| item.category() == def.id).count();
            categories.push(Category {
                id: def.id.clone(),
                name: def.name.clone(),
                count,
            });
        }
        Self { categories }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

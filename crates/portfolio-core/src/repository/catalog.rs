//! In-memory Catalog
//!
//! Keeps items in table order plus an id index. Duplicate ids are rejected
//! when the catalog is built.

use std::collections::HashMap;

use crate::domain::{DomainError, DomainResult, Entity};
use super::traits::Repository;

#[derive(Debug, Clone)]
pub struct Catalog<T: Entity> {
    items: Vec<T>,
    index: HashMap<T::Id, usize>,
}

impl<T: Entity> Catalog<T> {
    pub fn new(items: Vec<T>) -> DomainResult<Self> {
        let mut index = HashMap::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            if index.insert(item.id(), pos).is_some() {
                return Err(DomainError::Conflict(format!("duplicate id {:?}", item.id())));
            }
        }
        Ok(Self { items, index })
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.index.contains_key(id)
    }
}

impl<T: Entity> Default for Catalog<T> {
    fn default() -> Self {
        Self { items: Vec::new(), index: HashMap::new() }
    }
}

impl<T: Entity> Repository<T> for Catalog<T> {
    fn find_by_id(&self, id: &T::Id) -> Option<&T> {
        self.index.get(id).map(|&pos| &self.items[pos])
    }

    fn list(&self) -> &[T] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Photo;

    fn photo(id: u32) -> Photo {
        Photo {
            id,
            src: format!("/images/{}.jpg", id),
            alt: String::new(),
            title: format!("Photo {}", id),
            category: "travel".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_find_by_id() {
        let catalog = Catalog::new(vec![photo(3), photo(1)]).unwrap();
        assert_eq!(catalog.find_by_id(&1).unwrap().title, "Photo 1");
        assert!(catalog.find_by_id(&2).is_none());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_keeps_table_order() {
        let catalog = Catalog::new(vec![photo(3), photo(1), photo(2)]).unwrap();
        let ids: Vec<u32> = catalog.list().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let catalog = Catalog::new(vec![photo(1)]).unwrap();
        assert!(matches!(catalog.get(&9), Err(DomainError::NotFound(_))));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = Catalog::new(vec![photo(1), photo(1)]).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }
}

//! Repository Layer - Core Traits
//!
//! Content is fixed at build time, so the contract is read-only and
//! synchronous.

use crate::domain::{DomainError, DomainResult, Entity};

/// Read-only lookup over a collection of entities
pub trait Repository<T: Entity> {
    /// Find entity by ID
    fn find_by_id(&self, id: &T::Id) -> Option<&T>;

    /// All entities in table order
    fn list(&self) -> &[T];

    /// Like `find_by_id`, but a missing id is an error
    fn get(&self, id: &T::Id) -> DomainResult<&T> {
        self.find_by_id(id)
            .ok_or_else(|| DomainError::NotFound(format!("{:?}", id)))
    }

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}

//! Repository Layer - Core Traits
//!
//! Abstract interfaces for data access. The app keeps everything in memory;
//! persistence happens separately through a snapshot port.

use crate::domain::{DomainResult, Entity};

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type. Records keep insertion order.
pub trait Repository<T: Entity> {
    /// Input accepted by [`Repository::create`]
    type Draft;

    /// Create a new entity, assigning its id
    fn create(&mut self, draft: Self::Draft) -> T;

    /// Find entity by ID
    fn find_by_id(&self, id: &T::Id) -> Option<&T>;

    /// All entities in order
    fn list(&self) -> &[T];

    /// Delete entity by ID, returning it
    fn delete(&mut self, id: &T::Id) -> DomainResult<T>;
}

/// Extension for repositories that support text search
pub trait SearchableRepository<T: Entity>: Repository<T> {
    /// Search entities by text query
    fn search(&self, query: &str) -> Vec<&T>;
}

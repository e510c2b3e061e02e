use crate::core::Result;

/// Base repository trait for CRUD operations
/// All entity repositories implement this trait for consistency
pub trait Repository<T>: Send + Sync {
    /// Fields supplied by the caller when creating a record
    type Create;
    /// Partial update; `None` fields are left untouched
    type Patch;

    /// Create a new entity, assigning its id and timestamps
    fn create(&self, input: Self::Create) -> Result<T>;

    /// Find entity by ID
    fn find_by_id(&self, id: &str) -> Result<Option<T>>;

    /// Merge a patch into an existing entity
    fn update(&self, id: &str, patch: Self::Patch) -> Result<T>;

    /// Delete an entity by ID; dependents are left alone
    fn delete(&self, id: &str) -> Result<()>;

    /// List entities matching a predicate
    fn list_where(&self, predicate: &dyn Fn(&T) -> bool) -> Result<Vec<T>>;

    /// List all entities
    fn list(&self) -> Result<Vec<T>> {
        self.list_where(&|_| true)
    }
}

mod error;
mod file;

use crate::datastore::TaskStore;
pub use error::StorageError;
pub use file::JsonFileStorage;
#[cfg(test)]
pub use memory::MemoryTaskStorage;

// Storage
pub trait TaskStorage {
    /// Reads the persisted store. Missing or unreadable content yields an empty store.
    fn load(&self) -> Result<TaskStore, StorageError>;
    /// Overwrites the persisted store.
    fn save(&self, store: &TaskStore) -> Result<(), StorageError>;
}

mod datastore;
mod error;
pub mod storage;

pub use datastore::Filter;
pub use datastore::TaskStore;
pub use error::DataStoreError;
pub use storage::JsonFileStorage;
#[cfg(test)]
pub use storage::MemoryTaskStorage;
pub use storage::StorageError;
pub use storage::TaskStorage;

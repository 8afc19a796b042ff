use thiserror::Error;

use crate::datastore::StorageError;

// Failures that abort a command; user-level rejections are reported as outcomes instead
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

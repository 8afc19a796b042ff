use std::path::PathBuf;
use thiserror::*;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("cannot read task file '{0}' : {1}")]
    ReadError(PathBuf, std::io::Error),

    #[error("cannot write task file '{0}' : {1}")]
    WriteError(PathBuf, std::io::Error),

    #[error("format error {0} when writing tasks")]
    FormatError(#[from] serde_json::Error),
}

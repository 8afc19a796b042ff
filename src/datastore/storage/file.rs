use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::{StorageError, TaskStorage};
use crate::datastore::TaskStore;

const INDENT: &[u8] = b"    ";

/// Keeps the whole store as one JSON document on disk.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_owned(),
        }
    }

    fn read_contents(&self) -> Result<Option<Vec<u8>>, StorageError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StorageError::ReadError(self.path.clone(), err)),
        };
        let mut contents = vec![];
        BufReader::new(file)
            .read_to_end(&mut contents)
            .map_err(|e| StorageError::ReadError(self.path.clone(), e))?;
        Ok(Some(contents))
    }
}

impl TaskStorage for JsonFileStorage {
    fn load(&self) -> Result<TaskStore, StorageError> {
        let contents = match self.read_contents()? {
            Some(contents) => contents,
            None => {
                debug!(path = %self.path.display(), "no task file yet, starting empty");
                return Ok(TaskStore::new());
            }
        };

        match serde_json::from_slice::<TaskStore>(&contents) {
            Ok(store) => Ok(store),
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    reason = %err,
                    "task file is not a valid store, starting empty"
                );
                Ok(TaskStore::new())
            }
        }
    }

    fn save(&self, store: &TaskStore) -> Result<(), StorageError> {
        let file =
            File::create(&self.path).map_err(|e| StorageError::WriteError(self.path.clone(), e))?;
        let mut writer = BufWriter::new(file);
        {
            let mut serializer =
                Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(INDENT));
            store.serialize(&mut serializer)?;
        }
        writer
            .flush()
            .map_err(|e| StorageError::WriteError(self.path.clone(), e))?;
        Ok(())
    }
}

#[cfg(test)]
impl JsonFileStorage {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

use serde_derive::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{error::DataStoreError, storage::StorageError, storage::TaskStorage};
use crate::model::{Status, Task, TaskId};

/// The persisted aggregate: every task plus the counter used to mint ids.
///
/// `tasks` is kept in strictly ascending id order. Ids are never reused, so
/// `count` only ever grows, and it is never below the highest id in `tasks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TaskStore {
    pub count: u64,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Default)]
pub struct Filter {
    pub status: Option<Status>,
}

impl Filter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_status(status: Status) -> Self {
        Self {
            status: Some(status),
        }
    }

    fn matches(&self, task: &Task) -> bool {
        match self.status {
            Some(status) => task.status == status,
            None => true,
        }
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the store and restores its ordering invariants.
    pub fn load_from<S: TaskStorage + ?Sized>(storage: &S) -> Result<Self, StorageError> {
        let mut store = storage.load()?;
        store.repair();
        debug!(count = store.count, tasks = store.tasks.len(), "store loaded");
        Ok(store)
    }

    pub fn save_to<S: TaskStorage + ?Sized>(&self, storage: &S) -> Result<(), StorageError> {
        storage.save(self)?;
        debug!(count = self.count, tasks = self.tasks.len(), "store saved");
        Ok(())
    }

    /// Puts a hand-edited store back into ascending id order and lifts `count`
    /// to the highest id. Returns whether anything changed.
    pub fn repair(&mut self) -> bool {
        let mut repaired = false;

        if !self.is_ascending() {
            warn!("tasks are not in ascending id order, sorting them");
            self.tasks.sort_by_key(|task| task.id);
            repaired = true;
            if !self.is_ascending() {
                warn!("store contains duplicate task ids");
            }
        }

        if let Some(max_id) = self.tasks.iter().map(|task| task.id).max() {
            if self.count < max_id {
                warn!(
                    count = self.count,
                    max_id, "task counter is behind the highest id, raising it"
                );
                self.count = max_id;
                repaired = true;
            }
        }

        repaired
    }

    fn is_ascending(&self) -> bool {
        self.tasks.windows(2).all(|pair| pair[0].id < pair[1].id)
    }

    pub fn add(&mut self, description: String) -> Result<&Task, DataStoreError> {
        self.count = self
            .count
            .checked_add(1)
            .ok_or(DataStoreError::IdsExhausted)?;
        self.tasks.push(Task::new(self.count, description));
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    pub fn delete(&mut self, id: TaskId) -> Result<Task, DataStoreError> {
        if self.tasks.is_empty() {
            return Err(DataStoreError::Empty);
        }
        let index = self.position(id)?;
        Ok(self.tasks.remove(index))
    }

    pub fn mark(&mut self, id: TaskId, status: Status) -> Result<&Task, DataStoreError> {
        let index = self.position(id)?;
        let task = &mut self.tasks[index];
        task.mark(status);
        Ok(task)
    }

    pub fn update(&mut self, id: TaskId, description: String) -> Result<&Task, DataStoreError> {
        let index = self.position(id)?;
        let task = &mut self.tasks[index];
        task.rename(description);
        Ok(task)
    }

    pub fn items(&self, filter: &Filter) -> Result<Vec<Task>, DataStoreError> {
        if self.tasks.is_empty() {
            return Err(DataStoreError::Empty);
        }
        Ok(self
            .tasks
            .iter()
            .filter(|task| filter.matches(task))
            .cloned()
            .collect())
    }

    // Relies on ascending order, which `repair` guarantees after every load.
    fn position(&self, id: TaskId) -> Result<usize, DataStoreError> {
        let last = self.tasks.last().ok_or(DataStoreError::NotFound(id))?;
        if id > last.id {
            return Err(DataStoreError::NotFound(id));
        }
        for (index, task) in self.tasks.iter().enumerate() {
            if task.id == id {
                return Ok(index);
            }
            if task.id > id {
                break;
            }
        }
        Err(DataStoreError::NotFound(id))
    }
}

#[cfg(test)]
impl Filter {
    pub fn todo_tasks() -> Self {
        Self::with_status(Status::ToDo)
    }

    pub fn inprogress_tasks() -> Self {
        Self::with_status(Status::InProgress)
    }

    pub fn done_tasks() -> Self {
        Self::with_status(Status::Done)
    }
}

#[cfg(test)]
impl TaskStore {
    pub fn get(&self, id: TaskId) -> Result<&Task, DataStoreError> {
        self.position(id).map(|index| &self.tasks[index])
    }
}

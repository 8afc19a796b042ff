use thiserror::*;

use crate::model::TaskId;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum DataStoreError {
    #[error("There's no tasks in the task list.")]
    Empty,
    #[error("The id {0} doesn't exist in the task database. Check the entire list with the command: 'list'")]
    NotFound(TaskId),
    #[error("No task ids are left to assign, the task counter is at its maximum.")]
    IdsExhausted,
}

use serde_derive::{Deserialize, Serialize};

use super::{Status, Timestamp};

pub type TaskId = u64;

/// Task is a single to-do entry.
///
/// Field names and order match the on-disk layout of existing `tasks.json` files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Task {
    pub description: String,
    pub status: Status,
    #[serde(rename = "ID")]
    pub id: TaskId,
    #[serde(rename = "createdAt")]
    pub created_at: Timestamp,
    #[serde(rename = "updatedAT")]
    pub updated_at: Timestamp,
}

impl Task {
    pub fn new(id: TaskId, description: String) -> Task {
        let created_at = Timestamp::now();

        Self {
            description,
            status: Status::ToDo,
            id,
            updated_at: created_at.clone(),
            created_at,
        }
    }

    pub fn rename(&mut self, description: String) {
        self.description = description;
        self.updated_at = Timestamp::now();
    }

    // Status changes keep updated_at as is; only description edits touch it.
    pub fn mark(&mut self, status: Status) {
        self.status = status;
    }
}

mod error;
pub mod render;

use clap::Subcommand;
use std::fmt::Display;
use tracing::{info, instrument, warn};

pub use error::ControllerError;

use crate::datastore::{Filter, TaskStorage, TaskStore};
use crate::model::{Status, Task, TaskId};

pub const EMPTY_LIST: &str =
    "There's no task in the tasks database, you can add tasks by typing: add 'task description'";

/// One invocation of the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Adds a task to the to-do list
    Add { description: String },
    /// Removes the task with the given id
    Delete { id: TaskId },
    /// Sets the status of a task: to-do, in-progress or done
    Mark { status: String, id: TaskId },
    /// Replaces the description of a task
    Update { description: String, id: TaskId },
    /// Lists all tasks, or only those with the given status
    List { status: Option<String> },
}

impl Command {
    pub fn is_read_only(&self) -> bool {
        matches!(self, Command::List { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Done(String),
    Rejected(String),
    Listed(Vec<Task>),
}

/// Loads the store, runs a single command against it and persists the result.
///
/// `list` never writes. Mutating commands always write, even when rejected,
/// which leaves the file content unchanged.
#[instrument(skip(storage))]
pub fn execute<S>(storage: &S, command: Command) -> Result<Outcome, ControllerError>
where
    S: TaskStorage + ?Sized,
{
    let mut store = TaskStore::load_from(storage)?;
    let read_only = command.is_read_only();

    let outcome = apply(&mut store, command);

    if !read_only {
        store.save_to(storage)?;
    }
    Ok(outcome)
}

/// Runs a command against an already loaded store.
pub fn apply(store: &mut TaskStore, command: Command) -> Outcome {
    match command {
        Command::Add { description } => match store.add(description) {
            Ok(task) => {
                info!(id = task.id, "task added");
                Outcome::Done(format!("Task added successfully! (ID: {})", task.id))
            }
            Err(err) => rejected(err),
        },
        Command::Delete { id } => match store.delete(id) {
            Ok(task) => {
                info!(id = task.id, "task removed");
                Outcome::Done(format!("Task {} removed!", task.id))
            }
            Err(err) => rejected(err),
        },
        Command::Mark { status, id } => {
            let status = match status.parse::<Status>() {
                Ok(status) => status,
                Err(err) => return rejected(err),
            };
            match store.mark(id, status) {
                Ok(task) => {
                    info!(id = task.id, status = %task.status, "task marked");
                    Outcome::Done(format!("Task {} is marked as {}!", task.id, task.status))
                }
                Err(err) => rejected(err),
            }
        }
        Command::Update { description, id } => match store.update(id, description) {
            Ok(task) => {
                info!(id = task.id, "task updated");
                Outcome::Done(format!("Task {} updated!", task.id))
            }
            Err(err) => rejected(err),
        },
        Command::List { status } => {
            if store.tasks.is_empty() {
                return Outcome::Rejected(EMPTY_LIST.to_string());
            }
            let filter = match status {
                None => Filter::all(),
                Some(raw) => match raw.parse::<Status>() {
                    Ok(status) => Filter::with_status(status),
                    Err(err) => return rejected(err),
                },
            };
            match store.items(&filter) {
                Ok(tasks) => Outcome::Listed(tasks),
                Err(err) => rejected(err),
            }
        }
    }
}

fn rejected<E: Display>(err: E) -> Outcome {
    let message = err.to_string();
    warn!(reason = %message, "command rejected");
    Outcome::Rejected(message)
}

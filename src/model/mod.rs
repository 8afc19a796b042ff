pub mod error;
pub mod status;
pub mod task;
pub mod timestamp;

pub use error::ModelError;
pub use status::Status;
pub use task::{Task, TaskId};
pub use timestamp::Timestamp;

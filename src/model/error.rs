use thiserror::Error;

// Model validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error(
        "{0} is not a valid status! Verify if you typed it correctly\nStatus options: 'in-progress', 'to-do' or 'done'."
    )]
    InvalidStatus(String),
}

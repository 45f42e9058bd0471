use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by roster operations.
///
/// Everything except [`RosterError::Console`] is recoverable: the command loop
/// prints it and returns to the menu.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Student with Roll {0} already exists!")]
    DuplicateRoll(i32),

    #[error("{0}")]
    Validation(String),

    #[error("Student with Roll {0} not found!")]
    NotFound(i32),

    #[error("Could not open {} for saving: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input closed")]
    InputClosed,

    #[error("Console I/O failed: {0}")]
    Console(#[from] std::io::Error),
}

impl RosterError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;

// error.rs

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while handling a command.
#[derive(Debug, Error)]
pub enum TodoError {
    /// Bad user input: unparseable deadline, missing argument, non-numeric id.
    #[error("{0}")]
    Validation(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("No todo with ID {0}")]
    NotFound(u32),

    #[error("Todo {0} is already done")]
    AlreadyDone(u32),

    #[error("Todo {0} is already deleted")]
    AlreadyDeleted(u32),

    #[error("Todo {0} is done and can no longer be deleted")]
    CannotDeleteCompleted(u32),

    /// The highest stored id is `u32::MAX`; no new id can follow it.
    #[error("Cannot add more todos: highest ID {0} is already in use")]
    IdsExhausted(u32),

    #[error("Failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    /// The document exists but is not a valid todo list.
    #[error("Malformed todo file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to encode todos: {0}")]
    Encode(#[from] serde_json::Error),
}

impl TodoError {
    /// True for errors that mean persistence itself failed, as opposed to a
    /// rejected command.
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            TodoError::Read { .. }
                | TodoError::Write { .. }
                | TodoError::Parse { .. }
                | TodoError::Encode(_)
        )
    }
}

//! Error types surfaced to the user by notechad commands.

use thiserror::Error;

/// Failures a command reports before terminating.
///
/// Parsing never produces errors; these cover missing input, empty results
/// and file-system failures.
#[derive(Debug, Error)]
pub enum NoteError {
    /// A command needs a note name and none was given.
    #[error("\"{0}\" command needs a note name as argument")]
    MissingName(&'static str),

    /// No note has a matching name or file name.
    #[error("No note with corresponding name exists: {0}")]
    NoMatch(String),

    /// A search produced no results.
    #[error("No notes found!")]
    NoNotes,

    /// Reading, writing or launching failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias that pins the error type to [`NoteError`].
pub type Result<T> = std::result::Result<T, NoteError>;

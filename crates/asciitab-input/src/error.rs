//! Error types for the interactive session.

use std::io;

use asciitab::TableError;

/// Errors that can occur while collecting a table interactively.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Input ended (Ctrl+D or closed pipe) while a prompt was waiting.
    #[error("Prompt cancelled by user.")]
    PromptCancelled,

    /// Reading from or writing to the terminal failed.
    #[error("Prompt failed: {0}")]
    PromptFailed(#[source] io::Error),

    /// The table rejected the collected values.
    #[error(transparent)]
    Table(#[from] TableError),
}

//! Fatal error types for a copy session.
//!
//! Recoverable problems (bad or missing file names) never reach these types;
//! the prompt loop reports them and asks again.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure inside the chunked copy loop. Read and write sides are kept apart
/// so the caller can report which stream broke.
#[derive(Debug, Error)]
pub enum CopyError {
    #[error("read failed")]
    Read(#[source] io::Error),
    #[error("write failed")]
    Write(#[source] io::Error),
}

/// Errors that abort a session. The CLI maps every variant to exit code 1.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Console input ended before a source was chosen.
    #[error("no input source selected (console input closed)")]
    NoSelection,

    /// Console input ended while a file name was being prompted for.
    #[error("unable to get {role} file name (console input closed)")]
    MissingFileName { role: &'static str },

    #[error("failed to open input file {}", path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create output file {}", path.display())]
    OpenOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to sync output file {}", path.display())]
    Sync {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading a prompt answer or writing a prompt failed.
    #[error("console i/o failed")]
    Console(#[source] io::Error),

    #[error(transparent)]
    Copy(#[from] CopyError),
}

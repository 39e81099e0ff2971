//! All error types for the resx2cs crate.
//!
//! Every failure that can happen while converting a single `.resx` file is a
//! variant of [`Error`]. The batch driver logs the message and moves on to the
//! next file, so none of these abort a directory run.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("The parameter '{0}' must be a non-empty string.")]
    InvalidArgument(&'static str),

    #[error("The '{}' file is not a resource.", .0.display())]
    NotAResourceFile(PathBuf),

    #[error("The '{}' file is not a C# source file.", .0.display())]
    NotATargetLanguageFile(PathBuf),

    #[error("Project file not found for the '{}' directory.", .0.display())]
    ProjectNotFound(PathBuf),

    #[error("Malformed resource document: {0}")]
    MalformedDocument(String),

    #[error("The '{}' file not found or unreadable.", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("The '{}' output file could not be updated: {source}", path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("The '{}' directory does not exist.", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Creates a malformed document error from any parser diagnostic.
    pub fn malformed(diagnostic: impl ToString) -> Self {
        Error::MalformedDocument(diagnostic.to_string())
    }

    /// Creates an error for an output file that could not be compared or written.
    pub fn unwritable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::OutputUnwritable {
            path: path.into(),
            source,
        }
    }

    /// Creates an unreadable file error, keeping the low-level cause.
    pub fn unreadable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::FileUnreadable {
            path: path.into(),
            source,
        }
    }
}

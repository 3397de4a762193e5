use std::path::PathBuf;

use drawer_fs::EntryKind;
use thiserror::Error;

/// Why a file operation refused to run or failed while running.
#[derive(Debug, Error)]
pub enum Error {
    #[error("No such file or directory: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Path already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Expected a {expected} at {}, found a {found}", .path.display())]
    TypeMismatch {
        path: PathBuf,
        expected: EntryKind,
        found: EntryKind,
    },

    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error(transparent)]
    Underlying(#[from] anyhow::Error),
}

impl Error {
    /// The most likely cause, worded for diagnostics.
    pub fn reason(&self) -> &'static str {
        match self {
            Error::NotFound(_) => "path does not exist",
            Error::AlreadyExists(_) => "path already exists",
            Error::TypeMismatch { expected: EntryKind::Directory, .. } => "path is not a directory",
            Error::TypeMismatch { .. } => "path is not a file",
            Error::PermissionDenied(_) => "path is not readable",
            Error::Underlying(_) => "file system reported an error",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

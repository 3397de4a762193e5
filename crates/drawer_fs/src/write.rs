use std::path::Path;

use anyhow::{Context, Result};

use crate::EntryKind;

impl crate::DrawerFS {
    /// Creates exactly one directory level. Fails if the parent is missing or
    /// the path is already taken.
    pub fn create_dir<T: AsRef<Path>>(path: T) -> Result<()> {
        std::fs::create_dir(path.as_ref())
            .with_context(|| format!("Failed to create dir {}", path.as_ref().display()))
    }

    pub fn create_dir_all<T: AsRef<Path>>(path: T) -> Result<()> {
        std::fs::create_dir_all(path.as_ref())
            .with_context(|| format!("Failed to create dir {}", path.as_ref().display()))
    }

    pub fn remove_file<T: AsRef<Path>>(path: T) -> Result<()> {
        std::fs::remove_file(path.as_ref())
            .with_context(|| format!("Failed to remove file {}", path.as_ref().display()))
    }

    /// Removes whatever is at `path`, descending into directories.
    pub fn remove<T: AsRef<Path>>(path: T) -> Result<()> {
        let path = path.as_ref();
        match Self::kind(path) {
            EntryKind::Directory => std::fs::remove_dir_all(path)
                .with_context(|| format!("Failed to remove dir {}", path.display())),
            _ => Self::remove_file(path),
        }
    }
}

use std::path::Path;

use anyhow::{Context, Result};

use crate::EntryKind;

impl crate::DrawerFS {
    /// Classifies the path without following a failed lookup into an error.
    /// Symbolic links are resolved by the platform, as `Path::metadata` does.
    pub fn kind<T: AsRef<Path>>(path: T) -> EntryKind {
        match path.as_ref().metadata() {
            Ok(meta) if meta.is_dir() => EntryKind::Directory,
            Ok(_) => EntryKind::File,
            Err(_) => EntryKind::Absent,
        }
    }

    /// A path is readable when it can be opened: files for reading,
    /// directories for listing.
    pub fn is_readable<T: AsRef<Path>>(path: T) -> bool {
        let path = path.as_ref();
        match Self::kind(path) {
            EntryKind::Directory => std::fs::read_dir(path).is_ok(),
            EntryKind::File => std::fs::File::open(path).is_ok(),
            EntryKind::Absent => false,
        }
    }

    /// Whether both paths name the same existing entry once `.`/`..`
    /// components and symbolic links are resolved.
    pub fn same_entry<T: AsRef<Path>, U: AsRef<Path>>(a: T, b: U) -> bool {
        match (std::fs::canonicalize(a.as_ref()), std::fs::canonicalize(b.as_ref())) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }

    /// Counts the direct entries of a directory.
    pub fn entry_count<T: AsRef<Path>>(path: T) -> Result<usize> {
        let path = path.as_ref();
        let entries = std::fs::read_dir(path)
            .with_context(|| format!("Failed to read directory {}", path.display()))?;
        Ok(entries.filter(|entry| entry.is_ok()).count())
    }
}

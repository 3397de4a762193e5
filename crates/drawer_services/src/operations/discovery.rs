use std::path::{Path, PathBuf};

use drawer_domain::{EntryKind, Error, Mode, Result, RootDirectory};
use drawer_walker::WalkEntry;
use strum::IntoEnumIterator;
use tracing::{debug, info};

use crate::{FileOperationsManager, FsWalkService, Infrastructure};

impl<F: Infrastructure> FileOperationsManager<F> {
    /// Finds the first file named `filename` under the roots, searched in
    /// priority order: documents, resources, library, temporary.
    ///
    /// Each root is walked depth-first without a depth limit. Only
    /// non-directory entries whose final component equals `filename` match.
    pub fn find_path(&self, filename: &str) -> Option<PathBuf> {
        let found = RootDirectory::iter().find_map(|root| self.search_tree(self.root(root), filename));

        if self.debug_mode() {
            match &found {
                Some(path) => info!(filename, path = %path.display(), "File found"),
                None => info!(filename, "File not found under any root"),
            }
        }
        found
    }

    /// Finds the first file named `filename` below `directory`.
    pub fn find_path_in(
        &self,
        filename: &str,
        directory: impl AsRef<Path>,
    ) -> Result<Option<PathBuf>> {
        let directory = directory.as_ref();
        self.logged("find_path_in", directory, None, || {
            match self.kind_of(directory) {
                EntryKind::Absent => Err(Error::NotFound(directory.to_path_buf())),
                EntryKind::File => Err(Error::TypeMismatch {
                    path: directory.to_path_buf(),
                    expected: EntryKind::Directory,
                    found: EntryKind::File,
                }),
                EntryKind::Directory => Ok(self.search_tree(directory, filename)),
            }
        })
    }

    /// Locates `filename` with [`Self::find_path`] and copies it to `to`.
    pub fn find_and_copy(&self, filename: &str, to: impl AsRef<Path>) -> Result<PathBuf> {
        let source = self.locate(filename)?;
        self.copy_file(source, to, Mode::Strict)
    }

    /// Locates `filename` with [`Self::find_path`] and moves it to `to`.
    pub fn find_and_move(&self, filename: &str, to: impl AsRef<Path>) -> Result<PathBuf> {
        let source = self.locate(filename)?;
        self.move_file(source, to, Mode::Strict)
    }

    /// Locates `filename` with [`Self::find_path`] and deletes it. Returns the
    /// path that was removed.
    pub fn find_and_delete(&self, filename: &str) -> Result<PathBuf> {
        let source = self.locate(filename)?;
        self.delete_file(&source, Mode::Strict)?;
        Ok(source)
    }

    fn locate(&self, filename: &str) -> Result<PathBuf> {
        let path = Path::new(filename);
        self.logged("find_path", path, None, || {
            self.find_path(filename)
                .ok_or_else(|| Error::NotFound(path.to_path_buf()))
        })
    }

    fn search_tree(&self, root: &Path, filename: &str) -> Option<PathBuf> {
        for entry in self.infra().walk_service().walk(root) {
            match entry {
                WalkEntry::Entry(file)
                    if !file.is_dir && file.file_name.as_deref() == Some(filename) =>
                {
                    return Some(file.path);
                }
                WalkEntry::Entry(_) => {}
                WalkEntry::Skipped { path, reason } => debug!(
                    root = %root.display(),
                    path = ?path,
                    reason = %reason,
                    "Skipped entry while searching"
                ),
            }
        }
        None
    }
}

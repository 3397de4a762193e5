use std::path::{Path, PathBuf};

use drawer_domain::{EntryKind, Error, Mode, Result};

use crate::manager::strip_leading_separator;
use crate::{
    FileOperationsManager, FsCopyService, FsCreateDirsService, FsMetaService, FsMoveService,
    FsRemoveService, Infrastructure,
};

impl<F: Infrastructure> FileOperationsManager<F> {
    /// Creates a single directory. The parent must exist; an occupied path is
    /// left as it is and reported as `AlreadyExists`.
    pub fn create_directory(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.logged("create_directory", path, None, || {
            if self.kind_of(path).exists() {
                return Err(Error::AlreadyExists(path.to_path_buf()));
            }
            Ok(self.infra().create_dirs_service().create_dir(path)?)
        })
    }

    /// Creates `name` inside `parent` and returns the new path. A leading
    /// separator on `name` is ignored.
    pub fn create_subdirectory(&self, name: &str, parent: impl AsRef<Path>) -> Result<PathBuf> {
        let path = parent.as_ref().join(strip_leading_separator(name));
        self.create_directory(&path)?;
        Ok(path)
    }

    /// Copies the directory at `from`, with all of its descendants, to `to`.
    /// A `to` naming the source itself is refused with `AlreadyExists`.
    pub fn copy_directory(
        &self,
        from: impl AsRef<Path>,
        to: impl AsRef<Path>,
        mode: Mode,
    ) -> Result<()> {
        let (from, to) = (from.as_ref(), to.as_ref());
        self.logged("copy_directory", from, Some(to), || {
            self.check_source(from, EntryKind::Directory, mode)?;
            if self.infra().file_meta_service().is_same_entry(from, to) {
                return Err(Error::AlreadyExists(to.to_path_buf()));
            }
            Ok(self.infra().file_copy_service().copy(from, to)?)
        })
    }

    /// Relocates the directory at `from` to `to`.
    pub fn move_directory(
        &self,
        from: impl AsRef<Path>,
        to: impl AsRef<Path>,
        mode: Mode,
    ) -> Result<()> {
        let (from, to) = (from.as_ref(), to.as_ref());
        self.logged("move_directory", from, Some(to), || {
            self.check_source(from, EntryKind::Directory, mode)?;
            Ok(self.infra().file_move_service().move_item(from, to)?)
        })
    }

    /// Renames the directory at `at` to the sibling `new_name` and returns the
    /// sibling's path.
    ///
    /// This is a create followed by a move. If the create fails nothing is
    /// moved. If the move fails the freshly created sibling stays behind,
    /// empty.
    pub fn rename_directory(
        &self,
        at: impl AsRef<Path>,
        new_name: &str,
        mode: Mode,
    ) -> Result<PathBuf> {
        let at = at.as_ref();
        self.logged("rename_directory", at, None, || {
            let parent = at
                .parent()
                .ok_or_else(|| anyhow::anyhow!("Path has no parent: {}", at.display()))?;
            let sibling = parent.join(strip_leading_separator(new_name));

            self.check_source(at, EntryKind::Directory, mode)?;
            self.create_directory(&sibling)?;
            self.move_directory(at, &sibling, mode)?;
            Ok(sibling)
        })
    }

    /// Removes the directory at `at` and everything below it.
    pub fn delete_directory(&self, at: impl AsRef<Path>, mode: Mode) -> Result<()> {
        let at = at.as_ref();
        self.logged("delete_directory", at, None, || {
            self.check_source(at, EntryKind::Directory, mode)?;
            Ok(self.infra().file_remove_service().remove(at)?)
        })
    }
}

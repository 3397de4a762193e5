use std::path::{Path, PathBuf};

use bytes::Bytes;
use drawer_domain::{EntryKind, Error, Mode, Result};

use crate::manager::join_basename;
use crate::{
    FileOperationsManager, FsCopyService, FsMetaService, FsMoveService, FsReadService,
    FsRemoveService, Infrastructure,
};

impl<F: Infrastructure> FileOperationsManager<F> {
    /// Copies the file at `from` and returns where the copy landed.
    ///
    /// `to` may name a directory (existing or not) or an existing file; see
    /// [`Self::resolve_file_destination`].
    pub fn copy_file(
        &self,
        from: impl AsRef<Path>,
        to: impl AsRef<Path>,
        mode: Mode,
    ) -> Result<PathBuf> {
        let (from, to) = (from.as_ref(), to.as_ref());
        self.logged("copy_file", from, Some(to), || {
            self.check_source(from, EntryKind::File, mode)?;
            let destination = self.resolve_file_destination(from, to)?;
            self.infra().file_copy_service().copy(from, &destination)?;
            Ok(destination)
        })
    }

    /// Moves the file at `from` and returns its new path. Destination rules
    /// are the same as for [`Self::copy_file`].
    pub fn move_file(
        &self,
        from: impl AsRef<Path>,
        to: impl AsRef<Path>,
        mode: Mode,
    ) -> Result<PathBuf> {
        let (from, to) = (from.as_ref(), to.as_ref());
        self.logged("move_file", from, Some(to), || {
            self.check_source(from, EntryKind::File, mode)?;
            let destination = self.resolve_file_destination(from, to)?;
            self.infra().file_move_service().move_item(from, &destination)?;
            Ok(destination)
        })
    }

    pub fn delete_file(&self, at: impl AsRef<Path>, mode: Mode) -> Result<()> {
        let at = at.as_ref();
        self.logged("delete_file", at, None, || {
            self.check_source(at, EntryKind::File, mode)?;
            Ok(self.infra().file_remove_service().remove(at)?)
        })
    }

    /// Whether anything at all is at `at`.
    pub fn file_exists(&self, at: impl AsRef<Path>) -> bool {
        self.kind_of(at.as_ref()).exists()
    }

    /// Number of direct entries in `dir`. A directory that cannot be listed
    /// counts as empty.
    pub fn count_entries(&self, dir: impl AsRef<Path>) -> usize {
        let dir = dir.as_ref();
        self.logged("count_entries", dir, None, || {
            Ok(self.infra().file_meta_service().entry_count(dir)?)
        })
        .unwrap_or(0)
    }

    /// Full content of the file at `at`, or `None` when it is missing or
    /// cannot be read.
    pub fn read_file(&self, at: impl AsRef<Path>) -> Option<Bytes> {
        let at = at.as_ref();
        self.logged("read_file", at, None, || {
            if !self.kind_of(at).exists() {
                return Err(Error::NotFound(at.to_path_buf()));
            }
            Ok(self.infra().file_read_service().read(at)?)
        })
        .ok()
    }

    /// Where a file copied or moved from `source` to `to` ends up:
    ///
    /// - `to` is a directory: `to/<basename(source)>`
    /// - `to` is a file: `to` itself, which gets overwritten
    /// - nothing at `to`: `to` is created as a directory, then as above
    ///
    /// Landing on `source` itself, under any spelling, is refused with
    /// `AlreadyExists`.
    fn resolve_file_destination(&self, source: &Path, to: &Path) -> Result<PathBuf> {
        let destination = match self.kind_of(to) {
            EntryKind::Directory => join_basename(to, source)?,
            EntryKind::File => to.to_path_buf(),
            EntryKind::Absent => {
                let destination = join_basename(to, source)?;
                self.create_directory(to)?;
                destination
            }
        };

        if destination == source
            || self.infra().file_meta_service().is_same_entry(source, &destination)
        {
            return Err(Error::AlreadyExists(destination));
        }
        Ok(destination)
    }
}

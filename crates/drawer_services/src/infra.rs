use std::path::Path;

use bytes::Bytes;
use drawer_domain::{EntryKind, EnvironmentService};
use drawer_walker::WalkEntry;

/// Existence and type queries.
///
/// This trait provides an abstraction over metadata lookups, allowing for
/// both real file system access and test mocking.
pub trait FsMetaService: Send + Sync {
    /// Classifies what is at `path`. Never fails: anything that cannot be
    /// looked up is `Absent`.
    fn kind(&self, path: &Path) -> EntryKind;

    /// Whether the entry at `path` can be opened for reading (files) or
    /// listing (directories).
    fn is_readable(&self, path: &Path) -> bool;

    /// Whether `a` and `b` refer to the same existing entry, however they are
    /// spelled.
    fn is_same_entry(&self, a: &Path, b: &Path) -> bool;

    /// Number of direct entries of the directory at `path`.
    fn entry_count(&self, path: &Path) -> anyhow::Result<usize>;
}

pub trait FsCreateDirsService: Send + Sync {
    /// Creates a single directory level. The parent must already exist.
    fn create_dir(&self, path: &Path) -> anyhow::Result<()>;
}

pub trait FsCopyService: Send + Sync {
    /// Copies a file, or a directory together with its descendants.
    fn copy(&self, from: &Path, to: &Path) -> anyhow::Result<()>;
}

pub trait FsMoveService: Send + Sync {
    /// Relocates a file or directory.
    fn move_item(&self, from: &Path, to: &Path) -> anyhow::Result<()>;
}

pub trait FsRemoveService: Send + Sync {
    /// Removes a file, or a directory together with its descendants.
    fn remove(&self, path: &Path) -> anyhow::Result<()>;
}

pub trait FsReadService: Send + Sync {
    /// Reads the content of a file at the specified path.
    /// Returns the file content as raw bytes.
    fn read(&self, path: &Path) -> anyhow::Result<Bytes>;
}

pub trait FsWalkService: Send + Sync {
    /// Depth-first enumeration of everything below `root`. Entries that
    /// cannot be read come back as `WalkEntry::Skipped`; the walk goes on.
    fn walk(&self, root: &Path) -> Box<dyn Iterator<Item = WalkEntry> + '_>;
}

pub trait Infrastructure: Send + Sync + Clone + 'static {
    type EnvironmentService: EnvironmentService;
    type FsMetaService: FsMetaService;
    type FsCreateDirsService: FsCreateDirsService;
    type FsCopyService: FsCopyService;
    type FsMoveService: FsMoveService;
    type FsRemoveService: FsRemoveService;
    type FsReadService: FsReadService;
    type FsWalkService: FsWalkService;

    fn environment_service(&self) -> &Self::EnvironmentService;
    fn file_meta_service(&self) -> &Self::FsMetaService;
    fn create_dirs_service(&self) -> &Self::FsCreateDirsService;
    fn file_copy_service(&self) -> &Self::FsCopyService;
    fn file_move_service(&self) -> &Self::FsMoveService;
    fn file_remove_service(&self) -> &Self::FsRemoveService;
    fn file_read_service(&self) -> &Self::FsReadService;
    fn walk_service(&self) -> &Self::FsWalkService;
}

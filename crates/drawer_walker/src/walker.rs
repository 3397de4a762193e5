use std::path::PathBuf;

use derive_setters::Setters;
use ignore::{DirEntry, WalkBuilder};

#[derive(Clone, Debug, PartialEq)]
pub struct File {
    pub path: PathBuf,
    pub file_name: Option<String>,
    pub is_dir: bool,
    /// Depth below the walk root, starting at 1 for direct children.
    pub depth: usize,
}

/// One step of a walk. A bad entry is reported as `Skipped` and the walk
/// carries on with its siblings.
#[derive(Clone, Debug, PartialEq)]
pub enum WalkEntry {
    Entry(File),
    Skipped {
        path: Option<PathBuf>,
        reason: String,
    },
}

impl WalkEntry {
    pub fn file(&self) -> Option<&File> {
        match self {
            WalkEntry::Entry(file) => Some(file),
            WalkEntry::Skipped { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Setters)]
pub struct Walker {
    /// Base directory to start walking from
    cwd: PathBuf,
}

impl Walker {
    /// Creates a walker that visits every descendant of `cwd` with no depth
    /// limit. Hidden entries are included and ignore files are not honoured.
    pub fn max_all() -> Self {
        Self { cwd: PathBuf::new() }
    }

    /// Depth-first, pre-order walk over the descendants of `cwd`. The root
    /// itself is not yielded. Siblings are visited in file name order.
    pub fn iter(&self) -> impl Iterator<Item = WalkEntry> {
        WalkBuilder::new(&self.cwd)
            .standard_filters(false)
            .hidden(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build()
            .filter_map(|result| match result {
                Ok(entry) if entry.depth() == 0 => None,
                Ok(entry) => Some(WalkEntry::Entry(Self::to_file(entry))),
                Err(err) => Some(WalkEntry::Skipped { path: error_path(&err), reason: err.to_string() }),
            })
    }

    fn to_file(entry: DirEntry) -> File {
        let is_dir = entry.file_type().is_some_and(|ty| ty.is_dir());
        let depth = entry.depth();
        let path = entry.into_path();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string());
        File { path, file_name, is_dir, depth }
    }
}

fn error_path(err: &ignore::Error) -> Option<PathBuf> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.clone()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child.clone()),
        ignore::Error::Partial(errs) => errs.iter().find_map(error_path),
        _ => None,
    }
}

use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// What currently occupies a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Absent,
    File,
    Directory,
}

impl EntryKind {
    pub fn exists(&self) -> bool {
        !matches!(self, EntryKind::Absent)
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, EntryKind::Directory)
    }
}

use std::path::{Path, PathBuf};

use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// The per-application storage locations. Declaration order is the search
/// priority used by file discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RootDirectory {
    Documents,
    Resources,
    Library,
    Temporary,
}

#[derive(Debug, Setters, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[setters(into)]
/// Represents the environment in which the application is running.
pub struct Environment {
    /// User documents.
    pub documents_dir: PathBuf,
    /// Read-mostly data shipped alongside the executable.
    pub resources_dir: PathBuf,
    /// Application support data.
    pub library_dir: PathBuf,
    /// Scratch space.
    pub temp_dir: PathBuf,
}

impl Environment {
    pub fn root(&self, root: RootDirectory) -> &Path {
        match root {
            RootDirectory::Documents => &self.documents_dir,
            RootDirectory::Resources => &self.resources_dir,
            RootDirectory::Library => &self.library_dir,
            RootDirectory::Temporary => &self.temp_dir,
        }
    }
}

/// Resolves the environment from the host.
pub trait EnvironmentService: Send + Sync {
    fn get_environment(&self) -> Environment;
}

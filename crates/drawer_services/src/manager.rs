use std::path::{Path, PathBuf};
use std::sync::Arc;

use drawer_domain::{EntryKind, Environment, EnvironmentService, Error, Mode, Result, RootDirectory};
use tracing::{info, warn};

use crate::{FsMetaService, Infrastructure};

/// Directory and file lifecycle operations over four per-application roots.
///
/// The roots are resolved once, when the manager is built, and never change.
/// Every mutating operation inspects the current state of its source path
/// before acting and reports refusals as typed [`Error`]s. The debug flag only
/// changes how much is logged.
pub struct FileOperationsManager<F> {
    infra: Arc<F>,
    env: Environment,
    debug: bool,
}

impl<F: Infrastructure> FileOperationsManager<F> {
    pub fn new(infra: Arc<F>) -> Self {
        let env = infra.environment_service().get_environment();
        Self { infra, env, debug: false }
    }

    pub fn documents_dir(&self) -> &Path {
        &self.env.documents_dir
    }

    pub fn resources_dir(&self) -> &Path {
        &self.env.resources_dir
    }

    pub fn library_dir(&self) -> &Path {
        &self.env.library_dir
    }

    pub fn temp_dir(&self) -> &Path {
        &self.env.temp_dir
    }

    pub fn root(&self, root: RootDirectory) -> &Path {
        self.env.root(root)
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn debug_mode(&self) -> bool {
        self.debug
    }

    pub fn set_debug_mode(&mut self, enabled: bool) {
        self.debug = enabled;
    }

    pub(crate) fn infra(&self) -> &F {
        &self.infra
    }

    /// Checks that `path` may be acted on as an `expected` entry.
    ///
    /// Order matters: existence, then readability, then kind. Returns what is
    /// actually there so permissive callers can dispatch on it.
    pub(crate) fn check_source(
        &self,
        path: &Path,
        expected: EntryKind,
        mode: Mode,
    ) -> Result<EntryKind> {
        let meta = self.infra.file_meta_service();
        let found = meta.kind(path);

        if !found.exists() {
            return Err(Error::NotFound(path.to_path_buf()));
        }
        if !meta.is_readable(path) {
            return Err(Error::PermissionDenied(path.to_path_buf()));
        }
        if found != expected && mode.is_strict() {
            return Err(Error::TypeMismatch { path: path.to_path_buf(), expected, found });
        }

        Ok(found)
    }

    pub(crate) fn kind_of(&self, path: &Path) -> EntryKind {
        self.infra.file_meta_service().kind(path)
    }

    /// Runs `operation` with logging around it and hands its result back
    /// untouched.
    ///
    /// Failures are always logged. Starts, successes and the likely reason of
    /// a failure are only logged while debugging.
    pub(crate) fn logged<T>(
        &self,
        operation: &'static str,
        path: &Path,
        target: Option<&Path>,
        run: impl FnOnce() -> Result<T>,
    ) -> Result<T> {
        if self.debug {
            match target {
                Some(target) => info!(
                    operation,
                    path = %path.display(),
                    target = %target.display(),
                    "Starting file operation"
                ),
                None => info!(operation, path = %path.display(), "Starting file operation"),
            }
        }

        let result = run();

        match &result {
            Ok(_) if self.debug => {
                info!(operation, path = %path.display(), "File operation completed")
            }
            Ok(_) => {}
            Err(error) if self.debug => warn!(
                operation,
                path = %path.display(),
                %error,
                reason = error.reason(),
                "File operation failed"
            ),
            Err(error) => {
                warn!(operation, path = %path.display(), %error, "File operation failed")
            }
        }
        result
    }
}

/// `name` with a single leading separator removed, so it always joins as a
/// relative component.
pub(crate) fn strip_leading_separator(name: &str) -> &str {
    name.strip_prefix(std::path::MAIN_SEPARATOR)
        .or_else(|| name.strip_prefix('/'))
        .unwrap_or(name)
}

/// `dir/<basename(source)>`.
pub(crate) fn join_basename(dir: &Path, source: &Path) -> Result<PathBuf> {
    source
        .file_name()
        .map(|name| dir.join(name))
        .ok_or_else(|| anyhow::anyhow!("Path has no file name: {}", source.display()).into())
}

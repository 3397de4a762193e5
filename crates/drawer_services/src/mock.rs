//! In-memory infrastructure for exercising the manager without touching disk.

use std::collections::{BTreeMap, HashSet};
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::bail;
use bytes::Bytes;
use drawer_domain::{EntryKind, Environment, EnvironmentService};
use drawer_walker::{File, WalkEntry};

use crate::{
    FsCopyService, FsCreateDirsService, FsMetaService, FsMoveService, FsReadService,
    FsRemoveService, FsWalkService, Infrastructure,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Dir,
    File(Bytes),
}

#[derive(Debug, Default)]
struct State {
    nodes: BTreeMap<PathBuf, Node>,
    unreadable: HashSet<PathBuf>,
    unwalkable: HashSet<PathBuf>,
    failing_reads: HashSet<PathBuf>,
    failing_moves: bool,
}

impl State {
    fn kind(&self, path: &Path) -> EntryKind {
        match self.nodes.get(path) {
            Some(Node::Dir) => EntryKind::Directory,
            Some(Node::File(_)) => EntryKind::File,
            None => EntryKind::Absent,
        }
    }

    fn subtree(&self, root: &Path) -> Vec<(PathBuf, Node)> {
        self.nodes
            .iter()
            .filter(|(path, _)| path.starts_with(root))
            .map(|(path, node)| (path.clone(), node.clone()))
            .collect()
    }

    fn remove_subtree(&mut self, root: &Path) {
        self.nodes.retain(|path, _| !path.starts_with(root));
    }

    fn copy(&mut self, from: &Path, to: &Path) -> anyhow::Result<()> {
        match self.kind(from) {
            EntryKind::Absent => bail!("Failed to copy {}: no such file or directory", from.display()),
            EntryKind::File => {
                let parent_is_dir = to.parent().is_some_and(|parent| self.kind(parent).is_dir());
                if !parent_is_dir {
                    bail!("Failed to copy file {} to {}", from.display(), to.display());
                }
            }
            EntryKind::Directory => {
                if to.starts_with(from) {
                    bail!("Failed to copy dir {} into its own subtree", from.display());
                }
                for ancestor in to.ancestors().skip(1) {
                    self.nodes.entry(ancestor.to_path_buf()).or_insert(Node::Dir);
                }
            }
        }

        for (path, node) in self.subtree(from) {
            let relative = path.strip_prefix(from)?;
            let target = if relative.as_os_str().is_empty() {
                to.to_path_buf()
            } else {
                to.join(relative)
            };
            self.nodes.insert(target, node);
        }
        Ok(())
    }
}

/// Resolves `.` and `..` components lexically.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

#[derive(Debug)]
pub struct MockEnvironmentService;

impl EnvironmentService for MockEnvironmentService {
    fn get_environment(&self) -> Environment {
        Environment {
            documents_dir: PathBuf::from("/app/Documents"),
            resources_dir: PathBuf::from("/app/Resources"),
            library_dir: PathBuf::from("/app/Library"),
            temp_dir: PathBuf::from("/app/tmp"),
        }
    }
}

#[derive(Debug, Default)]
pub struct MockFileService {
    state: Mutex<State>,
}

#[derive(Debug, Clone)]
pub struct MockInfrastructure {
    env_service: Arc<MockEnvironmentService>,
    file_service: Arc<MockFileService>,
}

impl MockInfrastructure {
    /// Starts with the four roots present and empty.
    pub fn new() -> Self {
        let infra = Self {
            env_service: Arc::new(MockEnvironmentService),
            file_service: Arc::new(MockFileService::default()),
        };
        let env = infra.env_service.get_environment();
        for dir in [&env.documents_dir, &env.resources_dir, &env.library_dir, &env.temp_dir] {
            infra.add_dir(dir);
        }
        infra
    }

    fn state(&self) -> std::sync::MutexGuard<'_, State> {
        self.file_service.state.lock().unwrap()
    }

    /// Adds a directory along with any missing ancestors.
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut state = self.state();
        for ancestor in path.as_ref().ancestors() {
            state.nodes.entry(ancestor.to_path_buf()).or_insert(Node::Dir);
        }
    }

    /// Adds a file along with any missing ancestor directories.
    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.state()
            .nodes
            .insert(path.to_path_buf(), Node::File(Bytes::from(content.to_string())));
    }

    pub fn deny_read(&self, path: impl AsRef<Path>) {
        self.state().unreadable.insert(path.as_ref().to_path_buf());
    }

    pub fn deny_walk(&self, path: impl AsRef<Path>) {
        self.state().unwalkable.insert(path.as_ref().to_path_buf());
    }

    pub fn fail_reads(&self, path: impl AsRef<Path>) {
        self.state().failing_reads.insert(path.as_ref().to_path_buf());
    }

    pub fn fail_moves(&self) {
        self.state().failing_moves = true;
    }

    pub fn entry_kind(&self, path: impl AsRef<Path>) -> EntryKind {
        self.state().kind(path.as_ref())
    }

    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        match self.state().nodes.get(path.as_ref()) {
            Some(Node::File(bytes)) => Some(String::from_utf8_lossy(bytes).to_string()),
            _ => None,
        }
    }

    pub fn snapshot(&self) -> BTreeMap<PathBuf, Node> {
        self.state().nodes.clone()
    }
}

impl FsMetaService for MockFileService {
    fn kind(&self, path: &Path) -> EntryKind {
        self.state.lock().unwrap().kind(path)
    }

    fn is_readable(&self, path: &Path) -> bool {
        let state = self.state.lock().unwrap();
        state.kind(path).exists() && !state.unreadable.contains(path)
    }

    fn is_same_entry(&self, a: &Path, b: &Path) -> bool {
        let (a, b) = (normalize(a), normalize(b));
        a == b && self.state.lock().unwrap().kind(&a).exists()
    }

    fn entry_count(&self, path: &Path) -> anyhow::Result<usize> {
        let state = self.state.lock().unwrap();
        if !state.kind(path).is_dir() || state.unreadable.contains(path) {
            bail!("Failed to read directory {}", path.display());
        }
        Ok(state
            .nodes
            .keys()
            .filter(|candidate| candidate.parent() == Some(path))
            .count())
    }
}

impl FsCreateDirsService for MockFileService {
    fn create_dir(&self, path: &Path) -> anyhow::Result<()> {
        let mut state = self.state.lock().unwrap();
        let parent_is_dir = path.parent().is_some_and(|parent| state.kind(parent).is_dir());
        if state.kind(path).exists() || !parent_is_dir {
            bail!("Failed to create dir {}", path.display());
        }
        state.nodes.insert(path.to_path_buf(), Node::Dir);
        Ok(())
    }
}

impl FsCopyService for MockFileService {
    fn copy(&self, from: &Path, to: &Path) -> anyhow::Result<()> {
        self.state.lock().unwrap().copy(from, to)
    }
}

impl FsMoveService for MockFileService {
    fn move_item(&self, from: &Path, to: &Path) -> anyhow::Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.failing_moves {
            bail!("Failed to move {} to {}", from.display(), to.display());
        }

        let to_is_empty_dir = state.kind(to).is_dir()
            && !state.nodes.keys().any(|candidate| candidate.parent() == Some(to));
        if from != to && state.kind(from).exists() && to_is_empty_dir {
            state.nodes.remove(to);
        }

        state.copy(from, to)?;
        state.remove_subtree(from);
        Ok(())
    }
}

impl FsRemoveService for MockFileService {
    fn remove(&self, path: &Path) -> anyhow::Result<()> {
        let mut state = self.state.lock().unwrap();
        if !state.kind(path).exists() {
            bail!("Failed to remove file {}", path.display());
        }
        state.remove_subtree(path);
        Ok(())
    }
}

impl FsReadService for MockFileService {
    fn read(&self, path: &Path) -> anyhow::Result<Bytes> {
        let state = self.state.lock().unwrap();
        match state.nodes.get(path) {
            Some(Node::File(bytes)) if !state.failing_reads.contains(path) => Ok(bytes.clone()),
            _ => bail!("Failed to read file {}", path.display()),
        }
    }
}

impl FsWalkService for MockFileService {
    fn walk(&self, root: &Path) -> Box<dyn Iterator<Item = WalkEntry> + '_> {
        let state = self.state.lock().unwrap();
        if !state.kind(root).is_dir() {
            let skipped = WalkEntry::Skipped {
                path: Some(root.to_path_buf()),
                reason: "not a directory".to_string(),
            };
            return Box::new(std::iter::once(skipped));
        }

        let mut entries = Vec::new();
        let mut blocked: Vec<PathBuf> = Vec::new();
        for (path, node) in state.nodes.iter() {
            if path == root || !path.starts_with(root) {
                continue;
            }
            if blocked.iter().any(|dir| path.starts_with(dir)) {
                continue;
            }

            let is_dir = matches!(node, Node::Dir);
            entries.push(WalkEntry::Entry(File {
                path: path.clone(),
                file_name: path.file_name().map(|name| name.to_string_lossy().to_string()),
                is_dir,
                depth: path.components().count() - root.components().count(),
            }));

            if is_dir && state.unwalkable.contains(path) {
                entries.push(WalkEntry::Skipped {
                    path: Some(path.clone()),
                    reason: "permission denied".to_string(),
                });
                blocked.push(path.clone());
            }
        }
        Box::new(entries.into_iter())
    }
}

impl Infrastructure for MockInfrastructure {
    type EnvironmentService = MockEnvironmentService;
    type FsMetaService = MockFileService;
    type FsCreateDirsService = MockFileService;
    type FsCopyService = MockFileService;
    type FsMoveService = MockFileService;
    type FsRemoveService = MockFileService;
    type FsReadService = MockFileService;
    type FsWalkService = MockFileService;

    fn environment_service(&self) -> &Self::EnvironmentService {
        &self.env_service
    }

    fn file_meta_service(&self) -> &Self::FsMetaService {
        &self.file_service
    }

    fn create_dirs_service(&self) -> &Self::FsCreateDirsService {
        &self.file_service
    }

    fn file_copy_service(&self) -> &Self::FsCopyService {
        &self.file_service
    }

    fn file_move_service(&self) -> &Self::FsMoveService {
        &self.file_service
    }

    fn file_remove_service(&self) -> &Self::FsRemoveService {
        &self.file_service
    }

    fn file_read_service(&self) -> &Self::FsReadService {
        &self.file_service
    }

    fn walk_service(&self) -> &Self::FsWalkService {
        &self.file_service
    }
}

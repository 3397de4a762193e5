use std::sync::Arc;

use drawer_domain::{Environment, EnvironmentService};
use drawer_services::Infrastructure;

use crate::env::DrawerEnvironmentService;
use crate::fs_copy::DrawerFileCopyService;
use crate::fs_create_dirs::DrawerCreateDirsService;
use crate::fs_meta::DrawerFileMetaService;
use crate::fs_move::DrawerFileMoveService;
use crate::fs_read::DrawerFileReadService;
use crate::fs_remove::DrawerFileRemoveService;
use crate::fs_walk::DrawerWalkService;

/// Resolves the roots from a fixed [`Environment`] instead of the host.
pub struct FixedEnvironmentService(Environment);

impl EnvironmentService for FixedEnvironmentService {
    fn get_environment(&self) -> Environment {
        self.0.clone()
    }
}

/// Where the roots come from: the host, or a caller-supplied environment.
pub enum EnvironmentSource {
    Host(DrawerEnvironmentService),
    Fixed(FixedEnvironmentService),
}

impl EnvironmentService for EnvironmentSource {
    fn get_environment(&self) -> Environment {
        match self {
            EnvironmentSource::Host(service) => service.get_environment(),
            EnvironmentSource::Fixed(service) => service.get_environment(),
        }
    }
}

#[derive(Clone)]
pub struct DrawerInfra {
    environment_service: Arc<EnvironmentSource>,
    file_meta_service: Arc<DrawerFileMetaService>,
    create_dirs_service: Arc<DrawerCreateDirsService>,
    file_copy_service: Arc<DrawerFileCopyService>,
    file_move_service: Arc<DrawerFileMoveService>,
    file_remove_service: Arc<DrawerFileRemoveService>,
    file_read_service: Arc<DrawerFileReadService>,
    walk_service: Arc<DrawerWalkService>,
}

impl DrawerInfra {
    pub fn new() -> Self {
        Self::with_source(EnvironmentSource::Host(DrawerEnvironmentService::new()))
    }

    /// Uses `env` as-is for the roots.
    pub fn with_environment(env: Environment) -> Self {
        Self::with_source(EnvironmentSource::Fixed(FixedEnvironmentService(env)))
    }

    fn with_source(source: EnvironmentSource) -> Self {
        Self {
            environment_service: Arc::new(source),
            file_meta_service: Arc::new(DrawerFileMetaService),
            create_dirs_service: Arc::new(DrawerCreateDirsService),
            file_copy_service: Arc::new(DrawerFileCopyService),
            file_move_service: Arc::new(DrawerFileMoveService),
            file_remove_service: Arc::new(DrawerFileRemoveService),
            file_read_service: Arc::new(DrawerFileReadService::new()),
            walk_service: Arc::new(DrawerWalkService),
        }
    }
}

impl Default for DrawerInfra {
    fn default() -> Self {
        Self::new()
    }
}

impl Infrastructure for DrawerInfra {
    type EnvironmentService = EnvironmentSource;
    type FsMetaService = DrawerFileMetaService;
    type FsCreateDirsService = DrawerCreateDirsService;
    type FsCopyService = DrawerFileCopyService;
    type FsMoveService = DrawerFileMoveService;
    type FsRemoveService = DrawerFileRemoveService;
    type FsReadService = DrawerFileReadService;
    type FsWalkService = DrawerWalkService;

    fn environment_service(&self) -> &Self::EnvironmentService {
        &self.environment_service
    }

    fn file_meta_service(&self) -> &Self::FsMetaService {
        &self.file_meta_service
    }

    fn create_dirs_service(&self) -> &Self::FsCreateDirsService {
        &self.create_dirs_service
    }

    fn file_copy_service(&self) -> &Self::FsCopyService {
        &self.file_copy_service
    }

    fn file_move_service(&self) -> &Self::FsMoveService {
        &self.file_move_service
    }

    fn file_remove_service(&self) -> &Self::FsRemoveService {
        &self.file_remove_service
    }

    fn file_read_service(&self) -> &Self::FsReadService {
        &self.file_read_service
    }

    fn walk_service(&self) -> &Self::FsWalkService {
        &self.walk_service
    }
}

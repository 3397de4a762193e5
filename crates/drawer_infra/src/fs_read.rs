use std::path::Path;

use bytes::Bytes;
use drawer_services::FsReadService;

#[derive(Default)]
pub struct DrawerFileReadService;

impl DrawerFileReadService {
    pub fn new() -> Self {
        Self
    }
}

impl FsReadService for DrawerFileReadService {
    fn read(&self, path: &Path) -> anyhow::Result<Bytes> {
        Ok(Bytes::from(drawer_fs::DrawerFS::read(path)?))
    }
}

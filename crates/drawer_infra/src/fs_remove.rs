use std::path::Path;

use drawer_services::FsRemoveService;

#[derive(Default)]
pub struct DrawerFileRemoveService;

impl FsRemoveService for DrawerFileRemoveService {
    fn remove(&self, path: &Path) -> anyhow::Result<()> {
        drawer_fs::DrawerFS::remove(path)
    }
}

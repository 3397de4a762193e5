use std::path::Path;

use drawer_services::FsCreateDirsService;

#[derive(Default)]
pub struct DrawerCreateDirsService;

impl FsCreateDirsService for DrawerCreateDirsService {
    fn create_dir(&self, path: &Path) -> anyhow::Result<()> {
        drawer_fs::DrawerFS::create_dir(path)
    }
}

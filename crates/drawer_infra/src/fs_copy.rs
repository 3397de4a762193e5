use std::path::Path;

use drawer_services::FsCopyService;

#[derive(Default)]
pub struct DrawerFileCopyService;

impl FsCopyService for DrawerFileCopyService {
    fn copy(&self, from: &Path, to: &Path) -> anyhow::Result<()> {
        drawer_fs::DrawerFS::copy(from, to)
    }
}

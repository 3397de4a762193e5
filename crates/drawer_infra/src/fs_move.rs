use std::path::Path;

use drawer_services::FsMoveService;

#[derive(Default)]
pub struct DrawerFileMoveService;

impl FsMoveService for DrawerFileMoveService {
    fn move_item(&self, from: &Path, to: &Path) -> anyhow::Result<()> {
        drawer_fs::DrawerFS::move_item(from, to)
    }
}

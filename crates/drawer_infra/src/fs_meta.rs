use std::path::Path;

use drawer_domain::EntryKind;
use drawer_fs::DrawerFS;
use drawer_services::FsMetaService;

pub struct DrawerFileMetaService;

impl FsMetaService for DrawerFileMetaService {
    fn kind(&self, path: &Path) -> EntryKind {
        DrawerFS::kind(path)
    }

    fn is_readable(&self, path: &Path) -> bool {
        DrawerFS::is_readable(path)
    }

    fn is_same_entry(&self, a: &Path, b: &Path) -> bool {
        DrawerFS::same_entry(a, b)
    }

    fn entry_count(&self, path: &Path) -> anyhow::Result<usize> {
        DrawerFS::entry_count(path)
    }
}

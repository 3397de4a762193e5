use std::path::Path;

use drawer_services::FsWalkService;
use drawer_walker::{WalkEntry, Walker};

#[derive(Default)]
pub struct DrawerWalkService;

impl FsWalkService for DrawerWalkService {
    fn walk(&self, root: &Path) -> Box<dyn Iterator<Item = WalkEntry> + '_> {
        Box::new(Walker::max_all().cwd(root.to_path_buf()).iter())
    }
}

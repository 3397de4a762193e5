use std::path::Path;

use anyhow::{Context, Result};

impl crate::DrawerFS {
    pub fn read<T: AsRef<Path>>(path: T) -> Result<Vec<u8>> {
        std::fs::read(path.as_ref())
            .with_context(|| format!("Failed to read file {}", path.as_ref().display()))
    }
}

use std::path::Path;

use anyhow::{bail, Context, Result};
use ignore::WalkBuilder;

use crate::EntryKind;

impl crate::DrawerFS {
    /// Copies a file, or a directory with all of its descendants.
    ///
    /// Files overwrite an existing file at `to`. Directories are merged into
    /// `to`, which is created (with parents) when missing.
    pub fn copy<T: AsRef<Path>, U: AsRef<Path>>(from: T, to: U) -> Result<()> {
        let (from, to) = (from.as_ref(), to.as_ref());
        match Self::kind(from) {
            EntryKind::Directory => Self::copy_dir(from, to),
            EntryKind::File => Self::copy_file(from, to),
            EntryKind::Absent => bail!("Failed to copy {}: no such file or directory", from.display()),
        }
    }

    fn copy_file(from: &Path, to: &Path) -> Result<()> {
        if Self::same_entry(from, to) {
            bail!("Failed to copy file {} onto itself", from.display());
        }
        std::fs::copy(from, to)
            .map(|_| ())
            .with_context(|| format!("Failed to copy file {} to {}", from.display(), to.display()))
    }

    fn copy_dir(from: &Path, to: &Path) -> Result<()> {
        if to.starts_with(from) {
            bail!(
                "Failed to copy dir {} into its own subtree {}",
                from.display(),
                to.display()
            );
        }

        let walk = WalkBuilder::new(from)
            .standard_filters(false)
            .follow_links(false)
            .build();

        for entry in walk {
            let entry =
                entry.with_context(|| format!("Failed to read dir entry under {}", from.display()))?;
            let relative = entry
                .path()
                .strip_prefix(from)
                .with_context(|| format!("Failed to strip prefix from path: {}", entry.path().display()))?;
            let target = to.join(relative);

            if entry.file_type().is_some_and(|ty| ty.is_dir()) {
                Self::create_dir_all(&target)?;
            } else {
                Self::copy_file(entry.path(), &target)?;
            }
        }

        Ok(())
    }
}

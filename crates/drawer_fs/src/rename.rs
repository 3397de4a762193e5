use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::EntryKind;

impl crate::DrawerFS {
    /// Moves a file or directory to `to`.
    ///
    /// An empty directory already at `to` is replaced by the moved item.
    /// When the platform rename fails (typically across devices) the item is
    /// copied and the source removed.
    pub fn move_item<T: AsRef<Path>, U: AsRef<Path>>(from: T, to: U) -> Result<()> {
        let (from, to) = (from.as_ref(), to.as_ref());

        if from != to && Self::kind(from).exists() && Self::is_empty_dir(to) {
            std::fs::remove_dir(to)
                .with_context(|| format!("Failed to replace empty dir {}", to.display()))?;
        }

        match std::fs::rename(from, to) {
            Ok(()) => Ok(()),
            Err(error) if Self::kind(from) != EntryKind::Absent => {
                debug!(from = %from.display(), to = %to.display(), %error, "Rename failed, falling back to copy");
                Self::copy(from, to)
                    .and_then(|_| Self::remove(from))
                    .with_context(|| format!("Failed to move {} to {}", from.display(), to.display()))
            }
            Err(error) => Err(error)
                .with_context(|| format!("Failed to move {} to {}", from.display(), to.display())),
        }
    }

    fn is_empty_dir(path: &Path) -> bool {
        std::fs::read_dir(path)
            .map(|mut entries| entries.next().is_none())
            .unwrap_or(false)
    }
}

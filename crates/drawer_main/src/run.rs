use std::io::Write;
use std::path::Path;

use anyhow::bail;
use colored::Colorize;
use drawer_domain::{Mode, RootDirectory};
use drawer_services::{FileOperationsManager, Infrastructure};
use strum::IntoEnumIterator;

use crate::cli::Command;
use crate::status::StatusDisplay;

/// Runs one command against `manager`, writing its output to `out`.
pub fn execute<F: Infrastructure>(
    command: &Command,
    mode: Mode,
    manager: &FileOperationsManager<F>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Command::Mkdir { path } => {
            manager.create_directory(path)?;
            done(out, "Created", path)
        }
        Command::Mksub { name, parent } => {
            let path = manager.create_subdirectory(name, parent)?;
            done(out, "Created", &path)
        }
        Command::CopyDir { from, to } => {
            manager.copy_directory(from, to, mode)?;
            done(out, "Copied to", to)
        }
        Command::MoveDir { from, to } => {
            manager.move_directory(from, to, mode)?;
            done(out, "Moved to", to)
        }
        Command::RenameDir { path, new_name } => {
            let renamed = manager.rename_directory(path, new_name, mode)?;
            done(out, "Renamed to", &renamed)
        }
        Command::DeleteDir { path } => {
            manager.delete_directory(path, mode)?;
            done(out, "Deleted", path)
        }
        Command::Copy { from, to } => {
            let copied = manager.copy_file(from, to, mode)?;
            done(out, "Copied to", &copied)
        }
        Command::Move { from, to } => {
            let moved = manager.move_file(from, to, mode)?;
            done(out, "Moved to", &moved)
        }
        Command::Delete { path } => {
            manager.delete_file(path, mode)?;
            done(out, "Deleted", path)
        }
        Command::Exists { path } => {
            writeln!(out, "{}", manager.file_exists(path))?;
            Ok(())
        }
        Command::Count { path } => {
            writeln!(out, "{}", manager.count_entries(path))?;
            Ok(())
        }
        Command::Cat { path } => match manager.read_file(path) {
            Some(content) => Ok(out.write_all(&content)?),
            None => bail!("Could not read {}", path.display()),
        },
        Command::Find { name, within } => {
            let found = match within {
                Some(dir) => manager.find_path_in(name, dir)?,
                None => manager.find_path(name),
            };
            match found {
                Some(path) => {
                    writeln!(out, "{}", path.display())?;
                    Ok(())
                }
                None => bail!("No file named {} was found", name),
            }
        }
        Command::FindCopy { name, to } => {
            let copied = manager.find_and_copy(name, to)?;
            done(out, "Copied to", &copied)
        }
        Command::FindMove { name, to } => {
            let moved = manager.find_and_move(name, to)?;
            done(out, "Moved to", &moved)
        }
        Command::FindDelete { name } => {
            let deleted = manager.find_and_delete(name)?;
            done(out, "Deleted", &deleted)
        }
        Command::Roots { json } => {
            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(manager.environment())?)?;
            } else {
                for root in RootDirectory::iter() {
                    let label = format!("{:<10}", root.to_string());
                    writeln!(
                        out,
                        "{} {}",
                        label.bold().bright_yellow(),
                        manager.root(root).display()
                    )?;
                }
            }
            Ok(())
        }
    }
}

fn done(out: &mut impl Write, action: &str, path: &Path) -> anyhow::Result<()> {
    let message = format!("{} {}", action, path.display());
    writeln!(out, "{}", StatusDisplay::success(&message).format())?;
    Ok(())
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use drawer_domain::Mode;

#[derive(Parser, Debug)]
#[command(name = "drawer", version = env!("CARGO_PKG_VERSION"))]
/// Directory and file lifecycle operations over the per-application roots.
pub struct Cli {
    /// Enable verbose output mode.
    ///
    /// Announces every operation and its outcome, and explains the likely
    /// reason of a failure.
    #[arg(long, short = 'v', global = true, default_value_t = false)]
    pub verbose: bool,

    /// Act on whatever is at the source path, file or directory.
    ///
    /// By default an operation refuses a source of the wrong kind.
    #[arg(long, global = true, default_value_t = false)]
    pub permissive: bool,

    /// Write logs to an hourly rolling file in this directory instead of
    /// stderr.
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.permissive {
            Mode::Permissive
        } else {
            Mode::Strict
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Create a directory; its parent must exist
    Mkdir { path: PathBuf },

    /// Create a named directory inside a parent
    Mksub { name: String, parent: PathBuf },

    /// Copy a directory with everything below it
    CopyDir { from: PathBuf, to: PathBuf },

    /// Move a directory
    MoveDir { from: PathBuf, to: PathBuf },

    /// Rename a directory within its parent
    RenameDir { path: PathBuf, new_name: String },

    /// Delete a directory with everything below it
    DeleteDir { path: PathBuf },

    /// Copy a file into a directory, or over another file
    Copy { from: PathBuf, to: PathBuf },

    /// Move a file into a directory, or over another file
    Move { from: PathBuf, to: PathBuf },

    /// Delete a file
    Delete { path: PathBuf },

    /// Print whether anything exists at a path
    Exists { path: PathBuf },

    /// Print the number of direct entries of a directory
    Count { path: PathBuf },

    /// Print the content of a file
    Cat { path: PathBuf },

    /// Find a file by name under the roots, or under one directory
    Find {
        name: String,

        /// Search only below this directory
        #[arg(long = "in")]
        within: Option<PathBuf>,
    },

    /// Find a file by name and copy it
    FindCopy { name: String, to: PathBuf },

    /// Find a file by name and move it
    FindMove { name: String, to: PathBuf },

    /// Find a file by name and delete it
    FindDelete { name: String },

    /// Print the resolved root directories
    Roots {
        /// Print as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

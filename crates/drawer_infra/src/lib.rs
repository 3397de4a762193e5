mod env;
mod fs_copy;
mod fs_create_dirs;
mod fs_meta;
mod fs_move;
mod fs_read;
mod fs_remove;
mod fs_walk;
mod infra;

pub use env::*;
pub use infra::*;

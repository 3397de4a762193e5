mod cli;
mod log;
mod run;
mod status;

pub use cli::{Cli, Command};
pub use log::{init_tracing, Guard};
pub use run::execute;
pub use status::{StatusDisplay, StatusKind};

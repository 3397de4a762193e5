mod env;
mod error;
mod mode;

pub use drawer_fs::EntryKind;
pub use env::*;
pub use error::*;
pub use mode::*;

mod infra;
mod manager;
mod operations;

#[cfg(test)]
mod mock;

pub use infra::*;
pub use manager::*;

//! # DrawerFS
//!
//! A thin file system layer that standardizes error handling for the
//! primitives the file operations manager is built on.
//!
//! DrawerFS wraps `std::fs` with consistent error context using
//! anyhow::Context. Each fallible method reports failures in the format
//! "Failed to [operation] [path]", preserving the original cause. Existence
//! queries never fail: they classify the path as an [`EntryKind`].

mod copy;
mod kind;
mod meta;
mod read;
mod rename;
mod write;

pub use kind::EntryKind;

pub struct DrawerFS;

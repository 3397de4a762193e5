mod directory;
mod discovery;
mod file;

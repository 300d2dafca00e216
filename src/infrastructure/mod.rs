//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod store;

pub use config::resolve_store_path;
pub use store::{JsonFileStore, NoteStore};

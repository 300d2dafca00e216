//! Domain layer - Core entities

pub mod note;

pub use note::Note;

//! jotter - Terminal note-taking application
//!
//! A command-line application that keeps a small collection of titled notes
//! in a single JSON document, with an interactive menu and direct
//! subcommands for adding, listing, reading, updating, and deleting notes.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::JotterError;

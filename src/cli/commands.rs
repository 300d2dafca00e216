//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jotter")]
#[command(about = "Terminal note-taking application", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the note document (default: notes.json, or $JOTTER_FILE)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new note
    Add {
        /// Note title (unique, case-insensitive)
        title: String,

        /// Note body
        body: String,
    },

    /// List all notes
    List,

    /// Read a note found by title
    Read {
        /// Title to look up (exact match wins, then substring)
        query: String,
    },

    /// Replace the body of a note found by title
    Update {
        /// Title to look up (exact match wins, then substring)
        query: String,

        /// New note body
        body: String,
    },

    /// Delete a note found by title
    Delete {
        /// Title to look up (first substring match)
        query: String,
    },
}

//! Store-path resolution

use std::path::PathBuf;

/// Environment variable overriding the default document location
pub const STORE_PATH_ENV: &str = "JOTTER_FILE";

/// Default document filename, relative to the current directory
pub const DEFAULT_STORE_FILE: &str = "notes.json";

/// Resolve the note document path: an explicit CLI flag wins, then the
/// JOTTER_FILE environment variable, then `notes.json` in the current
/// directory.
pub fn resolve_store_path(flag: Option<PathBuf>) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }

    if let Ok(path) = std::env::var(STORE_PATH_ENV) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    PathBuf::from(DEFAULT_STORE_FILE)
}

//! JSON document store

use crate::domain::Note;
use crate::error::{JotterError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract storage gateway for the note collection.
///
/// The whole collection is read and written as one document; callers see
/// either the previous document or the new one, never a partial write.
pub trait NoteStore {
    /// Load the persisted note collection
    fn load(&self) -> Result<Vec<Note>>;

    /// Persist the full note collection, replacing the previous document
    fn save(&self, notes: &[Note]) -> Result<()>;
}

/// File-backed store keeping the notes as a pretty-printed JSON array
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given document path
    pub fn new(path: PathBuf) -> Self {
        JsonFileStore { path }
    }

    /// The document path this store reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NoteStore for JsonFileStore {
    /// Load the document. A missing file is not an error: the store
    /// initializes it to an empty array and returns an empty list, so a
    /// fresh start and an emptied collection look the same to callers.
    fn load(&self) -> Result<Vec<Note>> {
        if !self.path.exists() {
            self.save(&[])?;
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| {
            JotterError::Storage(format!("Cannot read {}: {}", self.path.display(), e))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            JotterError::Storage(format!("Cannot parse {}: {}", self.path.display(), e))
        })
    }

    /// Write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove
    /// the destination first.
    fn save(&self, notes: &[Note]) -> Result<()> {
        let contents = serde_json::to_string_pretty(notes).map_err(|e| {
            JotterError::Storage(format!("Cannot serialize note collection: {}", e))
        })?;

        let map_write_err = |e: std::io::Error| {
            JotterError::Storage(format!("Cannot write {}: {}", self.path.display(), e))
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(map_write_err)?;
            }
        }

        let tmp_name = format!(
            "{}.jotter-tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("notes.json"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, contents).map_err(map_write_err)?;

        if cfg!(windows) && self.path.exists() {
            fs::remove_file(&self.path).map_err(map_write_err)?;
        }

        fs::rename(&tmp_path, &self.path).map_err(map_write_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(temp: &TempDir) -> JsonFileStore {
        JsonFileStore::new(temp.path().join("notes.json"))
    }

    #[test]
    fn test_load_missing_file_creates_empty_document() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let notes = store.load().unwrap();
        assert!(notes.is_empty());

        // The document now exists on disk as an empty array
        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents.trim(), "[]");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let notes = vec![
            Note::new("Groceries", "milk, eggs"),
            Note::new("Trip Plan", "pack bags"),
        ];
        store.save(&notes).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, notes);
    }

    #[test]
    fn test_save_preserves_insertion_order() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let notes = vec![Note::new("b", "2"), Note::new("a", "1"), Note::new("c", "3")];
        store.save(&notes).unwrap();

        let loaded = store.load().unwrap();
        let titles: Vec<&str> = loaded.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_save_overwrites_previous_document() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store.save(&[Note::new("Old", "gone soon")]).unwrap();
        store.save(&[Note::new("New", "kept")]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "New");

        // No leftover temp file
        let leftovers: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains("jotter-tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_load_unparseable_document_is_storage_error() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        fs::write(store.path(), "{ not json").unwrap();

        let result = store.load();
        match result.unwrap_err() {
            JotterError::Storage(msg) => assert!(msg.contains("Cannot parse")),
            other => panic!("Expected Storage error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_wrong_shape_is_storage_error() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        // Valid JSON, but not an array of notes
        fs::write(store.path(), "{\"title\": \"x\"}").unwrap();

        let result = store.load();
        assert!(matches!(result.unwrap_err(), JotterError::Storage(_)));
    }

    #[test]
    fn test_document_is_pretty_printed_json_array() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store.save(&[Note::new("Groceries", "milk")]).unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        assert!(contents.starts_with('['));
        assert!(contents.contains("  {")); // 2-space indent
        assert!(contents.contains("\"title\": \"Groceries\""));
        assert!(contents.contains("\"time_added\""));
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("sub").join("notes.json"));

        store.save(&[]).unwrap();
        assert!(store.path().exists());
    }
}

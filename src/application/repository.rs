//! In-memory note repository
//!
//! Owns the note collection for the process lifetime and mirrors it to the
//! store after every mutation. Listing order is insertion order.

use crate::domain::Note;
use crate::error::{JotterError, Result};
use crate::infrastructure::NoteStore;

/// Repository over the note collection, persisting through a [`NoteStore`]
pub struct NoteRepository<S: NoteStore> {
    notes: Vec<Note>,
    store: S,
}

impl<S: NoteStore> NoteRepository<S> {
    /// Construct the repository by loading the persisted collection
    pub fn open(store: S) -> Result<Self> {
        let notes = store.load()?;
        Ok(NoteRepository { notes, store })
    }

    /// Add a new note stamped with the current time.
    ///
    /// Rejects a title or body that is empty after trimming, and a title
    /// that case-insensitively duplicates an existing note's title. A
    /// rejected add leaves the collection untouched.
    pub fn add(&mut self, title: &str, body: &str) -> Result<&Note> {
        if title.trim().is_empty() {
            return Err(JotterError::EmptyField("title"));
        }
        if body.trim().is_empty() {
            return Err(JotterError::EmptyField("body"));
        }
        if self.notes.iter().any(|n| n.title_matches(title)) {
            return Err(JotterError::DuplicateTitle(title.to_string()));
        }

        self.notes.push(Note::new(title, body));
        self.store.save(&self.notes)?;
        Ok(&self.notes[self.notes.len() - 1])
    }

    /// Find a note by title: a case-insensitive exact match wins, otherwise
    /// the first note (encounter order) whose title contains the query.
    /// An empty query matches nothing.
    pub fn find_by_title(&self, query: &str) -> Option<&Note> {
        self.find_index(query).map(|i| &self.notes[i])
    }

    /// Replace the body of the note resolved by `find_by_title`.
    /// Title and creation time are never touched.
    pub fn update(&mut self, query: &str, new_body: &str) -> Result<&Note> {
        if new_body.trim().is_empty() {
            return Err(JotterError::EmptyField("body"));
        }

        let index = self
            .find_index(query)
            .ok_or_else(|| JotterError::NoteNotFound(query.to_string()))?;

        self.notes[index].body = new_body.to_string();
        self.store.save(&self.notes)?;
        Ok(&self.notes[index])
    }

    /// Remove and return the note at the first index whose title
    /// case-insensitively contains the query. Unlike `find_by_title`, an
    /// earlier containment match is taken even when a later note matches
    /// exactly.
    pub fn delete(&mut self, query: &str) -> Result<Note> {
        if query.is_empty() {
            return Err(JotterError::NoteNotFound(query.to_string()));
        }

        let index = self
            .notes
            .iter()
            .position(|n| n.title_contains(query))
            .ok_or_else(|| JotterError::NoteNotFound(query.to_string()))?;

        let removed = self.notes.remove(index);
        self.store.save(&self.notes)?;
        Ok(removed)
    }

    /// All notes in insertion order
    pub fn list_all(&self) -> &[Note] {
        &self.notes
    }

    fn find_index(&self, query: &str) -> Option<usize> {
        if query.is_empty() {
            return None;
        }

        self.notes
            .iter()
            .position(|n| n.title_matches(query))
            .or_else(|| self.notes.iter().position(|n| n.title_contains(query)))
    }
}
